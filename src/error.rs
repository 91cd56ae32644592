//! Error types for notetect.

use thiserror::Error;

/// Common error type for notetect operations.
#[derive(Error, Debug)]
pub enum NotetectError {
    /// Database error.
    ///
    /// Wraps errors from the storage backend. Database failures are fatal to
    /// the request; this layer performs no retries.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Signup conflict: the email address is already registered.
    #[error("email already in use")]
    EmailInUse,

    /// Login failure. Unknown email and wrong password both produce this
    /// variant so a caller cannot probe which field was wrong.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Session token is malformed, expired, or carries a bad signature.
    /// All three collapse here.
    #[error("invalid session")]
    InvalidSession,

    /// Resource id could not be resolved.
    #[error("{0} not found")]
    NotFound(String),

    /// Ownership mismatch. Also produced when the target of a guarded
    /// mutation does not exist, so existence is not leaked.
    #[error("forbidden")]
    Forbidden,

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for NotetectError {
    fn from(e: sqlx::Error) -> Self {
        NotetectError::Database(e.to_string())
    }
}

/// Result type alias for notetect operations.
pub type Result<T> = std::result::Result<T, NotetectError>;
