//! Document handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use validator::Validate;

use crate::document::DocumentService;
use crate::web::dto::{ApiResponse, CreateDocumentRequest, DocumentResponse};
use crate::web::error::ApiError;
use crate::web::middleware::CurrentUser;

use super::AppState;

/// GET /api/documents - List the current user's documents.
pub async fn list_documents(
    State(state): State<Arc<AppState>>,
    CurrentUser(identity): CurrentUser,
) -> Result<Json<ApiResponse<Vec<DocumentResponse>>>, ApiError> {
    let documents = DocumentService::new(&state.db).list(identity).await?;

    Ok(Json(ApiResponse::new(
        documents.into_iter().map(DocumentResponse::from).collect(),
    )))
}

/// POST /api/documents - Record an uploaded document.
pub async fn create_document(
    State(state): State<Arc<AppState>>,
    CurrentUser(identity): CurrentUser,
    Json(req): Json<CreateDocumentRequest>,
) -> Result<Json<ApiResponse<DocumentResponse>>, ApiError> {
    req.validate().map_err(ApiError::from_validation_errors)?;

    let document = DocumentService::new(&state.db)
        .create(identity, &req.file_name, &req.file_path)
        .await?;

    Ok(Json(ApiResponse::new(document.into())))
}

/// DELETE /api/documents/{id} - Delete a document record.
pub async fn delete_document(
    State(state): State<Arc<AppState>>,
    CurrentUser(identity): CurrentUser,
    Path(document_id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    DocumentService::new(&state.db)
        .delete(identity, document_id)
        .await?;

    Ok(Json(ApiResponse::new(())))
}
