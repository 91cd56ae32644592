//! Response DTOs for the Web API.

use serde::Serialize;

use crate::auth::UserProfile;
use crate::document::Document;
use crate::folder::Folder;
use crate::note::Note;
use crate::subject::Subject;

/// Generic API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a new API response.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// User information in responses. Exactly id, name, and email - the
/// password hash has no representation here.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    /// User ID.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

impl From<UserProfile> for UserResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id,
            name: profile.name,
            email: profile.email,
        }
    }
}

/// Subject in responses.
#[derive(Debug, Serialize)]
pub struct SubjectResponse {
    /// Subject ID.
    pub id: i64,
    /// Subject name.
    pub name: String,
}

impl From<Subject> for SubjectResponse {
    fn from(subject: Subject) -> Self {
        Self {
            id: subject.id,
            name: subject.name,
        }
    }
}

/// Folder in responses.
#[derive(Debug, Serialize)]
pub struct FolderResponse {
    /// Folder ID.
    pub id: i64,
    /// Folder name.
    pub name: String,
    /// Owning subject ID.
    pub subject_id: i64,
}

impl From<Folder> for FolderResponse {
    fn from(folder: Folder) -> Self {
        Self {
            id: folder.id,
            name: folder.name,
            subject_id: folder.subject_id,
        }
    }
}

/// Note in responses.
#[derive(Debug, Serialize)]
pub struct NoteResponse {
    /// Note ID.
    pub id: i64,
    /// Note title.
    pub title: String,
    /// Note body.
    pub content: String,
    /// Folder the note is filed in, if any.
    pub folder_id: Option<i64>,
    /// Creation timestamp.
    pub created_at: String,
    /// Last modification timestamp.
    pub updated_at: String,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            content: note.content,
            folder_id: note.folder_id,
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}

/// Document in responses.
#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    /// Document ID.
    pub id: i64,
    /// Original file name.
    pub file_name: String,
    /// Storage path of the file payload.
    pub file_path: String,
    /// Upload timestamp.
    pub uploaded_at: String,
}

impl From<Document> for DocumentResponse {
    fn from(document: Document) -> Self {
        Self {
            id: document.id,
            file_name: document.file_name,
            file_path: document.file_path,
            uploaded_at: document.uploaded_at,
        }
    }
}
