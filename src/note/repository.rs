//! Note repository.

use sqlx::SqlitePool;

use super::{NewNote, Note};
use crate::{NotetectError, Result};

const NOTE_COLUMNS: &str = "id, title, content, user_id, folder_id, created_at, updated_at";

/// Repository for note CRUD operations.
pub struct NoteRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> NoteRepository<'a> {
    /// Create a new NoteRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new note.
    pub async fn create(&self, new_note: &NewNote) -> Result<Note> {
        let result = sqlx::query(
            "INSERT INTO notes (title, content, user_id, folder_id) VALUES (?, ?, ?, ?)",
        )
        .bind(&new_note.title)
        .bind(&new_note.content)
        .bind(new_note.user_id)
        .bind(new_note.folder_id)
        .execute(self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| NotetectError::NotFound("note".to_string()))
    }

    /// Get a note by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Note>> {
        let query = format!("SELECT {NOTE_COLUMNS} FROM notes WHERE id = ?");
        let result = sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(result)
    }

    /// List all notes owned by a user, most recently updated first.
    pub async fn list_by_owner(&self, user_id: i64) -> Result<Vec<Note>> {
        let query = format!(
            "SELECT {NOTE_COLUMNS} FROM notes WHERE user_id = ? ORDER BY updated_at DESC, id DESC"
        );
        let notes = sqlx::query_as::<_, Note>(&query)
            .bind(user_id)
            .fetch_all(self.pool)
            .await?;

        Ok(notes)
    }

    /// List all notes filed in a folder.
    pub async fn list_by_folder(&self, folder_id: i64) -> Result<Vec<Note>> {
        let query = format!(
            "SELECT {NOTE_COLUMNS} FROM notes WHERE folder_id = ? ORDER BY updated_at DESC, id DESC"
        );
        let notes = sqlx::query_as::<_, Note>(&query)
            .bind(folder_id)
            .fetch_all(self.pool)
            .await?;

        Ok(notes)
    }

    /// Update a note's title, refreshing `updated_at`.
    pub async fn update_title(&self, id: i64, title: &str) -> Result<Option<Note>> {
        let result = sqlx::query(
            "UPDATE notes SET title = ?, updated_at = datetime('now') WHERE id = ?",
        )
        .bind(title)
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }

    /// Update a note's content, refreshing `updated_at`.
    pub async fn update_content(&self, id: i64, content: &str) -> Result<Option<Note>> {
        let result = sqlx::query(
            "UPDATE notes SET content = ?, updated_at = datetime('now') WHERE id = ?",
        )
        .bind(content)
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }

    /// Set or clear a note's folder link, refreshing `updated_at`.
    pub async fn set_folder(&self, id: i64, folder_id: Option<i64>) -> Result<Option<Note>> {
        let result = sqlx::query(
            "UPDATE notes SET folder_id = ?, updated_at = datetime('now') WHERE id = ?",
        )
        .bind(folder_id)
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }

    /// Delete a note by ID.
    ///
    /// Returns true if a note was deleted.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
