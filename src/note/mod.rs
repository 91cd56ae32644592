//! Notes: owned directly by a user, optionally filed in a folder.

mod repository;
mod service;

pub use repository::NoteRepository;
pub use service::NoteService;

/// A note.
///
/// The folder link is optional; an unfiled note is authorized by its own
/// `user_id` alone. When a link exists, the folder's chain owner agrees
/// with `user_id` - the service re-validates this at creation and on every
/// move.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Note {
    /// Unique note ID.
    pub id: i64,
    /// Note title.
    pub title: String,
    /// Note body.
    pub content: String,
    /// Owning user ID, fixed at creation.
    pub user_id: i64,
    /// Folder this note is filed in, if any.
    pub folder_id: Option<i64>,
    /// When the note was created.
    pub created_at: String,
    /// When the note was last modified.
    pub updated_at: String,
}

/// Data for creating a new note.
#[derive(Debug, Clone)]
pub struct NewNote {
    /// Note title.
    pub title: String,
    /// Note body.
    pub content: String,
    /// Owning user ID.
    pub user_id: i64,
    /// Folder to file the note in, if any.
    pub folder_id: Option<i64>,
}

impl NewNote {
    /// Create an unfiled note record.
    pub fn new(title: impl Into<String>, content: impl Into<String>, user_id: i64) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            user_id,
            folder_id: None,
        }
    }

    /// File the note in a folder.
    pub fn with_folder(mut self, folder_id: i64) -> Self {
        self.folder_id = Some(folder_id);
        self
    }
}
