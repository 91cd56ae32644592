//! Subjects: the top level of a user's note hierarchy.

mod repository;
mod service;

pub use repository::SubjectRepository;
pub use service::SubjectService;

/// A subject owned directly by a user.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Subject {
    /// Unique subject ID.
    pub id: i64,
    /// Subject name.
    pub name: String,
    /// Owning user ID, fixed at creation.
    pub user_id: i64,
    /// When the subject was created.
    pub created_at: String,
}

/// Data for creating a new subject.
#[derive(Debug, Clone)]
pub struct NewSubject {
    /// Subject name.
    pub name: String,
    /// Owning user ID.
    pub user_id: i64,
}

impl NewSubject {
    /// Create a new subject record.
    pub fn new(name: impl Into<String>, user_id: i64) -> Self {
        Self {
            name: name.into(),
            user_id,
        }
    }
}
