//! Route handlers for the Web API.

mod auth;
mod document;
mod folder;
mod note;
mod subject;

pub use auth::{login, logout, me, signup, update_name, update_password};
pub use document::{create_document, delete_document, list_documents};
pub use folder::{create_folder, delete_folder, list_folders, rename_folder};
pub use note::{
    create_note, delete_note, get_note, list_folder_notes, list_notes, move_note,
    update_note_content, update_note_title,
};
pub use subject::{create_subject, delete_subject, list_subjects, rename_subject};

use crate::auth::TokenService;
use crate::db::Database;

/// Application state shared across handlers.
///
/// The token service carries the immutable signing key; the database owns
/// the connection pool. Both are cheap to clone and free of interior
/// mutability - each request works against storage directly.
#[derive(Clone)]
pub struct AppState {
    /// Database handle.
    pub db: Database,
    /// Session token service.
    pub tokens: TokenService,
}

impl AppState {
    /// Create a new application state.
    pub fn new(db: Database, jwt_secret: &str, session_expiry_days: u64) -> Self {
        Self {
            db,
            tokens: TokenService::new(jwt_secret, session_expiry_days),
        }
    }
}
