//! Subject handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use validator::Validate;

use crate::subject::SubjectService;
use crate::web::dto::{ApiResponse, CreateSubjectRequest, RenameRequest, SubjectResponse};
use crate::web::error::ApiError;
use crate::web::middleware::CurrentUser;

use super::AppState;

/// GET /api/subjects - List the current user's subjects.
pub async fn list_subjects(
    State(state): State<Arc<AppState>>,
    CurrentUser(identity): CurrentUser,
) -> Result<Json<ApiResponse<Vec<SubjectResponse>>>, ApiError> {
    let subjects = SubjectService::new(&state.db).list(identity).await?;

    Ok(Json(ApiResponse::new(
        subjects.into_iter().map(SubjectResponse::from).collect(),
    )))
}

/// POST /api/subjects - Create a subject.
pub async fn create_subject(
    State(state): State<Arc<AppState>>,
    CurrentUser(identity): CurrentUser,
    Json(req): Json<CreateSubjectRequest>,
) -> Result<Json<ApiResponse<SubjectResponse>>, ApiError> {
    req.validate().map_err(ApiError::from_validation_errors)?;

    let subject = SubjectService::new(&state.db)
        .create(identity, &req.name)
        .await?;

    Ok(Json(ApiResponse::new(subject.into())))
}

/// PATCH /api/subjects/{id} - Rename a subject.
pub async fn rename_subject(
    State(state): State<Arc<AppState>>,
    CurrentUser(identity): CurrentUser,
    Path(subject_id): Path<i64>,
    Json(req): Json<RenameRequest>,
) -> Result<Json<ApiResponse<SubjectResponse>>, ApiError> {
    req.validate().map_err(ApiError::from_validation_errors)?;

    let subject = SubjectService::new(&state.db)
        .rename(identity, subject_id, &req.name)
        .await?;

    Ok(Json(ApiResponse::new(subject.into())))
}

/// DELETE /api/subjects/{id} - Delete a subject and everything under it.
pub async fn delete_subject(
    State(state): State<Arc<AppState>>,
    CurrentUser(identity): CurrentUser,
    Path(subject_id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    SubjectService::new(&state.db)
        .delete(identity, subject_id)
        .await?;

    Ok(Json(ApiResponse::new(())))
}
