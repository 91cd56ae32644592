//! Folder repository.

use sqlx::SqlitePool;

use super::{Folder, NewFolder};
use crate::{NotetectError, Result};

/// Repository for folder CRUD operations.
pub struct FolderRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> FolderRepository<'a> {
    /// Create a new FolderRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new folder.
    pub async fn create(&self, new_folder: &NewFolder) -> Result<Folder> {
        let result = sqlx::query("INSERT INTO folders (name, subject_id) VALUES (?, ?)")
            .bind(&new_folder.name)
            .bind(new_folder.subject_id)
            .execute(self.pool)
            .await?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| NotetectError::NotFound("folder".to_string()))
    }

    /// Get a folder by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Folder>> {
        let result = sqlx::query_as::<_, Folder>(
            "SELECT id, name, subject_id, created_at FROM folders WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(result)
    }

    /// List all folders in a subject.
    pub async fn list_by_subject(&self, subject_id: i64) -> Result<Vec<Folder>> {
        let folders = sqlx::query_as::<_, Folder>(
            "SELECT id, name, subject_id, created_at FROM folders
             WHERE subject_id = ? ORDER BY name",
        )
        .bind(subject_id)
        .fetch_all(self.pool)
        .await?;

        Ok(folders)
    }

    /// Rename a folder.
    ///
    /// Returns the updated folder, or None if not found.
    pub async fn rename(&self, id: i64, name: &str) -> Result<Option<Folder>> {
        let result = sqlx::query("UPDATE folders SET name = ? WHERE id = ?")
            .bind(name)
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }

    /// Delete a folder by ID. Its notes cascade at the storage level.
    ///
    /// Returns true if a folder was deleted.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM folders WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
