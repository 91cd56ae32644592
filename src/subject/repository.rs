//! Subject repository.

use sqlx::SqlitePool;

use super::{NewSubject, Subject};
use crate::{NotetectError, Result};

/// Repository for subject CRUD operations.
pub struct SubjectRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> SubjectRepository<'a> {
    /// Create a new SubjectRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new subject.
    pub async fn create(&self, new_subject: &NewSubject) -> Result<Subject> {
        let result = sqlx::query("INSERT INTO subjects (name, user_id) VALUES (?, ?)")
            .bind(&new_subject.name)
            .bind(new_subject.user_id)
            .execute(self.pool)
            .await?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| NotetectError::NotFound("subject".to_string()))
    }

    /// Get a subject by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Subject>> {
        let result = sqlx::query_as::<_, Subject>(
            "SELECT id, name, user_id, created_at FROM subjects WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(result)
    }

    /// List all subjects owned by a user.
    pub async fn list_by_owner(&self, user_id: i64) -> Result<Vec<Subject>> {
        let subjects = sqlx::query_as::<_, Subject>(
            "SELECT id, name, user_id, created_at FROM subjects
             WHERE user_id = ? ORDER BY name",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(subjects)
    }

    /// Rename a subject.
    ///
    /// Returns the updated subject, or None if not found.
    pub async fn rename(&self, id: i64, name: &str) -> Result<Option<Subject>> {
        let result = sqlx::query("UPDATE subjects SET name = ? WHERE id = ?")
            .bind(name)
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }

    /// Delete a subject by ID. Folders (and their notes) cascade at the
    /// storage level.
    ///
    /// Returns true if a subject was deleted.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM subjects WHERE id = ?")
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
        let repo = SubjectRepository::new(db.pool());

        repo.create(&NewSubject::new("Math", 1)).await.unwrap();
        repo.create(&NewSubject::new("History", 1)).await.unwrap();

        let subjects = repo.list_by_owner(1).await.unwrap();
        assert_eq!(subjects.len(), 2);
        // Ordered by name
        assert_eq!(subjects[0].name, "History");
        assert_eq!(subjects[1].name, "Math");
    }

    #[tokio::test]
    async fn test_rename() {
        let db = setup().await;
        let repo = SubjectRepository::new(db.pool());

        let subject = repo.create(&NewSubject::new("Math", 1)).await.unwrap();
        let renamed = repo.rename(subject.id, "Maths").await.unwrap().unwrap();
        assert_eq!(renamed.name, "Maths");
    }

    #[tokio::test]
    async fn test_rename_missing() {
        let db = setup().await;
        let repo = SubjectRepository::new(db.pool());

        assert!(repo.rename(999, "X").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete() {
        let db = setup().await;
        let repo = SubjectRepository::new(db.pool());

        let subject = repo.create(&NewSubject::new("Math", 1)).await.unwrap();
        assert!(repo.delete(subject.id).await.unwrap());
        assert!(!repo.delete(subject.id).await.unwrap());
        assert!(repo.get_by_id(subject.id).await.unwrap().is_none());
    }
}
