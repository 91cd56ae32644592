//! Document service: metadata CRUD behind ownership checks.

use crate::auth::AuthenticatedIdentity;
use crate::authz::{OwnershipEngine, ResourceRef};
use crate::db::Database;
use crate::{NotetectError, Result};

use super::repository::DocumentRepository;
use super::{Document, NewDocument};

/// Service for document operations with ownership enforcement.
pub struct DocumentService<'a> {
    db: &'a Database,
}

impl<'a> DocumentService<'a> {
    /// Create a new DocumentService with the given database reference.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// List the requester's documents.
    pub async fn list(&self, identity: AuthenticatedIdentity) -> Result<Vec<Document>> {
        let repo = DocumentRepository::new(self.db.pool());
        repo.list_by_owner(identity.user_id()).await
    }

    /// Record an uploaded document owned by the requester.
    ///
    /// The file payload itself is written by the transport layer; this
    /// records where it landed.
    pub async fn create(
        &self,
        identity: AuthenticatedIdentity,
        file_name: &str,
        file_path: &str,
    ) -> Result<Document> {
        if file_name.trim().is_empty() {
            return Err(NotetectError::Validation(
                "file name must not be empty".to_string(),
            ));
        }
        if file_path.trim().is_empty() {
            return Err(NotetectError::Validation(
                "file path must not be empty".to_string(),
            ));
        }

        let repo = DocumentRepository::new(self.db.pool());
        repo.create(&NewDocument::new(file_name, file_path, identity.user_id()))
            .await
    }

    /// Delete a document after re-checking ownership.
    pub async fn delete(&self, identity: AuthenticatedIdentity, document_id: i64) -> Result<()> {
        OwnershipEngine::new(self.db)
            .authorize(identity, ResourceRef::Document(document_id))
            .await?;

        let repo = DocumentRepository::new(self.db.pool());
        repo.delete(document_id).await?;
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
        let service = DocumentService::new(&db);

        service
            .create(alice, "syllabus.pdf", "/files/syllabus.pdf")
            .await
            .unwrap();

        assert_eq!(service.list(alice).await.unwrap().len(), 1);
        assert!(service.list(bob).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_by_other_user_denied() {
        let (db, alice, bob) = setup().await;
        let service = DocumentService::new(&db);

        let doc = service
            .create(alice, "syllabus.pdf", "/files/syllabus.pdf")
            .await
            .unwrap();

        let result = service.delete(bob, doc.id).await;
        assert!(matches!(result, Err(NotetectError::Forbidden)));
        assert_eq!(service.list(alice).await.unwrap().len(), 1);

        assert!(service.delete(alice, doc.id).await.is_ok());
        assert!(service.list(alice).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_empty_fields_rejected() {
        let (db, alice, _) = setup().await;
        let service = DocumentService::new(&db);

        assert!(service.create(alice, "", "/p").await.is_err());
        assert!(service.create(alice, "a.pdf", " ").await.is_err());
    }
}
