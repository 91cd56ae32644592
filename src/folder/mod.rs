//! Folders: grouped under a subject, owned transitively by the subject's
//! user.

mod repository;
mod service;

pub use repository::FolderRepository;
pub use service::FolderService;

/// A folder within a subject.
///
/// Folders carry no owner column of their own; the effective owner is
/// always the owning subject's user.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Folder {
    /// Unique folder ID.
    pub id: i64,
    /// Folder name.
    pub name: String,
    /// Owning subject ID.
    pub subject_id: i64,
    /// When the folder was created.
    pub created_at: String,
}

/// Data for creating a new folder.
#[derive(Debug, Clone)]
pub struct NewFolder {
    /// Folder name.
    pub name: String,
    /// Owning subject ID.
    pub subject_id: i64,
}

impl NewFolder {
    /// Create a new folder record.
    pub fn new(name: impl Into<String>, subject_id: i64) -> Self {
        Self {
            name: name.into(),
            subject_id,
        }
    }
}
