//! notetect - note organization backend.
//!
//! Each user owns a tree of Subjects → Folders → Notes plus standalone
//! Documents, behind cookie-session authentication and per-resource
//! ownership checks.

pub mod auth;
pub mod authz;
pub mod config;
pub mod db;
pub mod document;
pub mod error;
pub mod folder;
pub mod logging;
pub mod note;
pub mod subject;
pub mod web;

pub use auth::{
    hash_password, validate_password, verify_password, AuthService, AuthenticatedIdentity,
    EstablishedSession, PasswordError, SessionClaims, TokenService, UserProfile,
};
pub use authz::{OwnershipEngine, ResourceRef};
pub use config::Config;
pub use db::{Database, NewUser, User, UserRepository, UserUpdate};
pub use document::{Document, DocumentService};
pub use error::{NotetectError, Result};
pub use folder::{Folder, FolderService};
pub use note::{Note, NoteService};
pub use subject::{Subject, SubjectService};
