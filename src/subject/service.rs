//! Subject service: pass-through CRUD behind ownership checks.

use crate::auth::AuthenticatedIdentity;
use crate::authz::{OwnershipEngine, ResourceRef};
use crate::db::Database;
use crate::{NotetectError, Result};

use super::repository::SubjectRepository;
use super::{NewSubject, Subject};

/// Maximum length for subject names (in characters).
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

/// Service for subject operations with ownership enforcement.
pub struct SubjectService<'a> {
    db: &'a Database,
}

impl<'a> SubjectService<'a> {
    /// Create a new SubjectService with the given database reference.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// List the requester's subjects.
    pub async fn list(&self, identity: AuthenticatedIdentity) -> Result<Vec<Subject>> {
        let repo = SubjectRepository::new(self.db.pool());
        repo.list_by_owner(identity.user_id()).await
    }

    /// Create a subject owned by the requester.
    pub async fn create(&self, identity: AuthenticatedIdentity, name: &str) -> Result<Subject> {
        validate_name(name)?;

        let repo = SubjectRepository::new(self.db.pool());
        repo.create(&NewSubject::new(name, identity.user_id())).await
    }

    /// Rename a subject after re-checking ownership.
    pub async fn rename(
        &self,
        identity: AuthenticatedIdentity,
        subject_id: i64,
        name: &str,
    ) -> Result<Subject> {
        validate_name(name)?;

        OwnershipEngine::new(self.db)
            .authorize(identity, ResourceRef::Subject(subject_id))
            .await?;

        let repo = SubjectRepository::new(self.db.pool());
        repo.rename(subject_id, name)
            .await?
            .ok_or(NotetectError::Forbidden)
    }

    /// Delete a subject after re-checking ownership. Storage cascades the
    /// delete to the subject's folders and their notes.
    pub async fn delete(&self, identity: AuthenticatedIdentity, subject_id: i64) -> Result<()> {
        OwnershipEngine::new(self.db)
            .authorize(identity, ResourceRef::Subject(subject_id))
            .await?;

        let repo = SubjectRepository::new(self.db.pool());
        repo.delete(subject_id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    async fn setup() -> (Database, AuthenticatedIdentity, AuthenticatedIdentity) {
        let db = Database::open_in_memory().await.unwrap();
        for (name, email) in [("Alice", "alice@x.com"), ("Bob", "bob@x.com")] {
            sqlx::query("INSERT INTO users (name, email, password) VALUES (?, ?, 'h')")
                .bind(name)
                .bind(email)
                .execute(db.pool())
                .await
                .unwrap();
        }
        (
            db,
            AuthenticatedIdentity::new(1),
            AuthenticatedIdentity::new(2),
        )
    }

    #[tokio::test]
    async fn test_create_and_list_scoped_to_owner() {
        let (db, alice, bob) = setup().await;
        let service = SubjectService::new(&db);

        service.create(alice, "Math").await.unwrap();
        service.create(bob, "Biology").await.unwrap();

        let alice_subjects = service.list(alice).await.unwrap();
        assert_eq!(alice_subjects.len(), 1);
        assert_eq!(alice_subjects[0].name, "Math");
    }

    #[tokio::test]
    async fn test_rename_by_owner() {
        let (db, alice, _) = setup().await;
        let service = SubjectService::new(&db);

        let subject = service.create(alice, "Math").await.unwrap();
        let renamed = service.rename(alice, subject.id, "Maths").await.unwrap();
        assert_eq!(renamed.name, "Maths");
    }

    #[tokio::test]
    async fn test_rename_by_other_user_denied() {
        let (db, alice, bob) = setup().await;
        let service = SubjectService::new(&db);

        let subject = service.create(alice, "Math").await.unwrap();
        let result = service.rename(bob, subject.id, "Mine Now").await;
        assert!(matches!(result, Err(NotetectError::Forbidden)));

        // Name unchanged
        let subjects = service.list(alice).await.unwrap();
        assert_eq!(subjects[0].name, "Math");
    }

    #[tokio::test]
    async fn test_delete_by_other_user_denied() {
        let (db, alice, bob) = setup().await;
        let service = SubjectService::new(&db);

        let subject = service.create(alice, "Math").await.unwrap();
        assert!(service.delete(bob, subject.id).await.is_err());
        assert_eq!(service.list(alice).await.unwrap().len(), 1);

        assert!(service.delete(alice, subject.id).await.is_ok());
        assert!(service.list(alice).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_empty_name_rejected() {
        let (db, alice, _) = setup().await;
        let service = SubjectService::new(&db);

        let result = service.create(alice, "  ").await;
        assert!(matches!(result, Err(NotetectError::Validation(_))));
    }
}
