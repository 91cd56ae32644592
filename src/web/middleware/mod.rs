//! Middleware for the Web API.

mod auth;
mod cors;

pub use auth::{auth_context, CurrentUser, SESSION_COOKIE};
pub use cors::create_cors_layer;
