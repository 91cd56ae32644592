//! Request and response DTOs for the Web API.

mod request;
mod response;

pub use request::{
    CreateDocumentRequest, CreateFolderRequest, CreateNoteRequest, CreateSubjectRequest,
    LoginRequest, MoveNoteRequest, RenameRequest, SignupRequest, UpdateNameRequest,
    UpdateNoteContentRequest, UpdateNoteTitleRequest, UpdatePasswordRequest,
};
pub use response::{
    ApiResponse, DocumentResponse, FolderResponse, NoteResponse, SubjectResponse, UserResponse,
};
