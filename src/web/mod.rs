//! Web API for notetect.
//!
//! Thin axum transport over the auth facade, ownership engine, and
//! resource services. The session token travels as an HTTP-only cookie
//! (Bearer header accepted as an alternative); handlers receive the
//! requester as a typed `CurrentUser` and pass it straight down.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::{ApiError, ErrorCode};
pub use handlers::AppState;
pub use router::{create_health_router, create_router};
pub use server::WebServer;
