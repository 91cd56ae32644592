//! Folder handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use validator::Validate;

use crate::folder::FolderService;
use crate::web::dto::{ApiResponse, CreateFolderRequest, FolderResponse, RenameRequest};
use crate::web::error::ApiError;
use crate::web::middleware::CurrentUser;

use super::AppState;

/// GET /api/subjects/{id}/folders - List the folders of a subject.
pub async fn list_folders(
    State(state): State<Arc<AppState>>,
    CurrentUser(identity): CurrentUser,
    Path(subject_id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<FolderResponse>>>, ApiError> {
    let folders = FolderService::new(&state.db)
        .list_for_subject(identity, subject_id)
        .await?;

    Ok(Json(ApiResponse::new(
        folders.into_iter().map(FolderResponse::from).collect(),
    )))
}

/// POST /api/subjects/{id}/folders - Create a folder inside a subject.
pub async fn create_folder(
    State(state): State<Arc<AppState>>,
    CurrentUser(identity): CurrentUser,
    Path(subject_id): Path<i64>,
    Json(req): Json<CreateFolderRequest>,
) -> Result<Json<ApiResponse<FolderResponse>>, ApiError> {
    req.validate().map_err(ApiError::from_validation_errors)?;

    let folder = FolderService::new(&state.db)
        .create(identity, subject_id, &req.name)
        .await?;

    Ok(Json(ApiResponse::new(folder.into())))
}

/// PATCH /api/folders/{id} - Rename a folder.
pub async fn rename_folder(
    State(state): State<Arc<AppState>>,
    CurrentUser(identity): CurrentUser,
    Path(folder_id): Path<i64>,
    Json(req): Json<RenameRequest>,
) -> Result<Json<ApiResponse<FolderResponse>>, ApiError> {
    req.validate().map_err(ApiError::from_validation_errors)?;

    let folder = FolderService::new(&state.db)
        .rename(identity, folder_id, &req.name)
        .await?;

    Ok(Json(ApiResponse::new(folder.into())))
}

/// DELETE /api/folders/{id} - Delete a folder and its notes.
pub async fn delete_folder(
    State(state): State<Arc<AppState>>,
    CurrentUser(identity): CurrentUser,
    Path(folder_id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    FolderService::new(&state.db)
        .delete(identity, folder_id)
        .await?;

    Ok(Json(ApiResponse::new(())))
}
