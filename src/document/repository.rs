//! Document repository.

use sqlx::SqlitePool;

use super::{Document, NewDocument};
use crate::{NotetectError, Result};

/// Repository for document metadata operations.
pub struct DocumentRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> DocumentRepository<'a> {
    /// Create a new DocumentRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Record a new document.
    pub async fn create(&self, new_document: &NewDocument) -> Result<Document> {
        let result = sqlx::query(
            "INSERT INTO documents (file_name, file_path, user_id) VALUES (?, ?, ?)",
        )
        .bind(&new_document.file_name)
        .bind(&new_document.file_path)
        .bind(new_document.user_id)
        .execute(self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| NotetectError::NotFound("document".to_string()))
    }

    /// Get a document by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Document>> {
        let result = sqlx::query_as::<_, Document>(
            "SELECT id, file_name, file_path, user_id, uploaded_at
             FROM documents WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(result)
    }

    /// List all documents owned by a user, most recent upload first.
    pub async fn list_by_owner(&self, user_id: i64) -> Result<Vec<Document>> {
        let documents = sqlx::query_as::<_, Document>(
            "SELECT id, file_name, file_path, user_id, uploaded_at
             FROM documents WHERE user_id = ? ORDER BY uploaded_at DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(documents)
    }

    /// Delete a document by ID.
    ///
    /// Returns true if a document was deleted.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM documents WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    async fn setup() -> Database {
        let db = Database::open_in_memory().await.unwrap();
        sqlx::query("INSERT INTO users (name, email, password) VALUES ('A', 'a@x.com', 'h')")
            .execute(db.pool())
            .await
            .unwrap();
        db
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let db = setup().await;
        let repo = DocumentRepository::new(db.pool());

        let doc = repo
            .create(&NewDocument::new("syllabus.pdf", "/files/syllabus.pdf", 1))
            .await
            .unwrap();
        assert_eq!(doc.file_name, "syllabus.pdf");
        assert_eq!(doc.user_id, 1);

        let docs = repo.list_by_owner(1).await.unwrap();
        assert_eq!(docs.len(), 1);
    }

    #[tokio::test]
    async fn test_delete() {
        let db = setup().await;
        let repo = DocumentRepository::new(db.pool());

        let doc = repo
            .create(&NewDocument::new("a.pdf", "/files/a.pdf", 1))
            .await
            .unwrap();
        assert!(repo.delete(doc.id).await.unwrap());
        assert!(!repo.delete(doc.id).await.unwrap());
        assert!(repo.get_by_id(doc.id).await.unwrap().is_none());
    }
}
