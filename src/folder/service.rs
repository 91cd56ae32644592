//! Folder service: CRUD within a subject, gated on the subject's owner.

use crate::auth::AuthenticatedIdentity;
use crate::authz::{OwnershipEngine, ResourceRef};
use crate::db::Database;
use crate::{NotetectError, Result};

use super::repository::FolderRepository;
use super::{Folder, NewFolder};

/// Maximum length for folder names (in characters).
pub const MAX_NAME_LENGTH: usize = 100;

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(NotetectError::Validation("name must not be empty".to_string()));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(NotetectError::Validation(format!(
            "name must be at most {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Service for folder operations with ownership enforcement.
pub struct FolderService<'a> {
    db: &'a Database,
}

impl<'a> FolderService<'a> {
    /// Create a new FolderService with the given database reference.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// List the folders of a subject the requester owns.
    pub async fn list_for_subject(
        &self,
        identity: AuthenticatedIdentity,
        subject_id: i64,
    ) -> Result<Vec<Folder>> {
        OwnershipEngine::new(self.db)
            .authorize(identity, ResourceRef::Subject(subject_id))
            .await?;

        let repo = FolderRepository::new(self.db.pool());
        repo.list_by_subject(subject_id).await
    }

    /// Create a folder inside a subject the requester owns.
    pub async fn create(
        &self,
        identity: AuthenticatedIdentity,
        subject_id: i64,
        name: &str,
    ) -> Result<Folder> {
        validate_name(name)?;

        OwnershipEngine::new(self.db)
            .authorize(identity, ResourceRef::Subject(subject_id))
            .await?;

        let repo = FolderRepository::new(self.db.pool());
        repo.create(&NewFolder::new(name, subject_id)).await
    }

    /// Rename a folder after re-checking chain ownership.
    pub async fn rename(
        &self,
        identity: AuthenticatedIdentity,
        folder_id: i64,
        name: &str,
    ) -> Result<Folder> {
        validate_name(name)?;

        OwnershipEngine::new(self.db)
            .authorize(identity, ResourceRef::Folder(folder_id))
            .await?;

        let repo = FolderRepository::new(self.db.pool());
        repo.rename(folder_id, name)
            .await?
            .ok_or(NotetectError::Forbidden)
    }

    /// Delete a folder after re-checking chain ownership. Its notes cascade
    /// at the storage level.
    pub async fn delete(&self, identity: AuthenticatedIdentity, folder_id: i64) -> Result<()> {
        OwnershipEngine::new(self.db)
            .authorize(identity, ResourceRef::Folder(folder_id))
            .await?;

        let repo = FolderRepository::new(self.db.pool());
        repo.delete(folder_id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::subject::SubjectService;

    async fn setup() -> (Database, AuthenticatedIdentity, AuthenticatedIdentity, i64) {
        let db = Database::open_in_memory().await.unwrap();
        for (name, email) in [("Alice", "alice@x.com"), ("Bob", "bob@x.com")] {
            sqlx::query("INSERT INTO users (name, email, password) VALUES (?, ?, 'h')")
                .bind(name)
                .bind(email)
                .execute(db.pool())
                .await
                .unwrap();
        }
        let alice = AuthenticatedIdentity::new(1);
        let bob = AuthenticatedIdentity::new(2);
        let subject = SubjectService::new(&db).create(alice, "Math").await.unwrap();
        (db, alice, bob, subject.id)
    }

    #[tokio::test]
    async fn test_create_and_list_in_own_subject() {
        let (db, alice, _, subject_id) = setup().await;
        let service = FolderService::new(&db);

        service.create(alice, subject_id, "Algebra").await.unwrap();

        let folders = service.list_for_subject(alice, subject_id).await.unwrap();
        assert_eq!(folders.len(), 1);
        assert_eq!(folders[0].name, "Algebra");
        assert_eq!(folders[0].subject_id, subject_id);
    }

    #[tokio::test]
    async fn test_create_in_foreign_subject_denied() {
        let (db, _, bob, subject_id) = setup().await;
        let service = FolderService::new(&db);

        let result = service.create(bob, subject_id, "Intrusion").await;
        assert!(matches!(result, Err(NotetectError::Forbidden)));
    }

    #[tokio::test]
    async fn test_list_foreign_subject_denied() {
        let (db, _, bob, subject_id) = setup().await;
        let service = FolderService::new(&db);

        let result = service.list_for_subject(bob, subject_id).await;
        assert!(matches!(result, Err(NotetectError::Forbidden)));
    }

    #[tokio::test]
    async fn test_rename_checks_chain_owner() {
        let (db, alice, bob, subject_id) = setup().await;
        let service = FolderService::new(&db);

        let folder = service.create(alice, subject_id, "Algebra").await.unwrap();

        assert!(service.rename(bob, folder.id, "Hijacked").await.is_err());
        let renamed = service.rename(alice, folder.id, "Linear Algebra").await.unwrap();
        assert_eq!(renamed.name, "Linear Algebra");
    }

    #[tokio::test]
    async fn test_delete_checks_chain_owner() {
        let (db, alice, bob, subject_id) = setup().await;
        let service = FolderService::new(&db);

        let folder = service.create(alice, subject_id, "Algebra").await.unwrap();

        assert!(service.delete(bob, folder.id).await.is_err());
        assert!(service.delete(alice, folder.id).await.is_ok());
        assert!(service
            .list_for_subject(alice, subject_id)
            .await
            .unwrap()
            .is_empty());
    }
}
