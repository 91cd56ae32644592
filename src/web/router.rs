//! Router configuration for the Web API.

use axum::{
    middleware,
    routing::{delete, get, patch, post, put},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_document, create_folder, create_note, create_subject, delete_document, delete_folder,
    delete_note, delete_subject, get_note, list_documents, list_folder_notes, list_folders,
    list_notes, list_subjects, login, logout, me, move_note, rename_folder, rename_subject,
    signup, update_name, update_note_content, update_note_title, update_password, AppState,
};
use super::middleware::{auth_context, create_cors_layer};

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>, cors_origins: &[String]) -> Router {
    let auth_routes = Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(me))
        .route("/name", patch(update_name))
        .route("/password", put(update_password));

    let subject_routes = Router::new()
        .route("/", get(list_subjects).post(create_subject))
        .route("/:id", patch(rename_subject).delete(delete_subject))
        .route("/:id/folders", get(list_folders).post(create_folder));

    let folder_routes = Router::new()
        .route("/:id", patch(rename_folder).delete(delete_folder))
        .route("/:id/notes", get(list_folder_notes));

    let note_routes = Router::new()
        .route("/", get(list_notes).post(create_note))
        .route("/:id", get(get_note).delete(delete_note))
        .route("/:id/title", patch(update_note_title))
        .route("/:id/content", patch(update_note_content))
        .route("/:id/move", put(move_note));

    let document_routes = Router::new()
        .route("/", get(list_documents).post(create_document))
        .route("/:id", delete(delete_document));

    let api_routes = Router::new()
        .nest("/auth", auth_routes)
        .nest("/subjects", subject_routes)
        .nest("/folders", folder_routes)
        .nest("/notes", note_routes)
        .nest("/documents", document_routes);

    // Clone for the middleware closure
    let state_for_middleware = app_state.clone();

    Router::new()
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins))
                .layer(middleware::from_fn(move |req, next| {
                    let state = state_for_middleware.clone();
                    auth_context(state, req, next)
                })),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
