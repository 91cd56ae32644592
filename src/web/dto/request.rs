//! Request DTOs for the Web API.

use serde::Deserialize;
use validator::Validate;

/// Signup request.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    /// Display name.
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Password (plaintext; hashed before storage, length checked by the
    /// auth facade).
    pub password: String,
}

/// Login request.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Email address.
    pub email: String,
    /// Password.
    pub password: String,
}

/// Display name update request.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateNameRequest {
    /// New display name.
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
}

/// Password change request.
#[derive(Debug, Deserialize)]
pub struct UpdatePasswordRequest {
    /// Current password, re-verified before the change.
    pub current_password: String,
    /// New password.
    pub new_password: String,
}

/// Subject create request.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSubjectRequest {
    /// Subject name.
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
}

/// Rename request shared by subjects and folders.
#[derive(Debug, Deserialize, Validate)]
pub struct RenameRequest {
    /// New name.
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
}

/// Folder create request (subject comes from the path).
#[derive(Debug, Deserialize, Validate)]
pub struct CreateFolderRequest {
    /// Folder name.
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
}

/// Note create request.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateNoteRequest {
    /// Note title.
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
    /// Note body.
    #[serde(default)]
    pub content: String,
    /// Folder to file the note in (optional).
    #[serde(default)]
    pub folder_id: Option<i64>,
}

/// Note title update request.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateNoteTitleRequest {
    /// New title.
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
}

/// Note content update request.
#[derive(Debug, Deserialize)]
pub struct UpdateNoteContentRequest {
    /// New body.
    pub content: String,
}

/// Note move request. `folder_id: null` unfiles the note.
#[derive(Debug, Deserialize)]
pub struct MoveNoteRequest {
    /// Destination folder, or null to unfile.
    pub folder_id: Option<i64>,
}

/// Document upload record request.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDocumentRequest {
    /// Original file name.
    #[validate(length(min = 1, max = 255, message = "File name must be 1-255 characters"))]
    pub file_name: String,
    /// Storage path of the file payload.
    #[validate(length(min = 1, message = "File path must not be empty"))]
    pub file_path: String,
}
