//! Documents: standalone uploads outside the subject tree.

mod repository;
mod service;

pub use repository::DocumentRepository;
pub use service::DocumentService;

/// Metadata for an uploaded document.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Document {
    /// Unique document ID.
    pub id: i64,
    /// Original file name.
    pub file_name: String,
    /// Storage path of the file payload.
    pub file_path: String,
    /// Owning user ID, fixed at creation.
    pub user_id: i64,
    /// Upload timestamp.
    pub uploaded_at: String,
}

/// Data for recording a new document.
#[derive(Debug, Clone)]
pub struct NewDocument {
    /// Original file name.
    pub file_name: String,
    /// Storage path of the file payload.
    pub file_path: String,
    /// Owning user ID.
    pub user_id: i64,
}

impl NewDocument {
    /// Create a new document record.
    pub fn new(
        file_name: impl Into<String>,
        file_path: impl Into<String>,
        user_id: i64,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            file_path: file_path.into(),
            user_id,
        }
    }
}
