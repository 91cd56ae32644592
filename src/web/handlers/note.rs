//! Note handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use validator::Validate;

use crate::note::NoteService;
use crate::web::dto::{
    ApiResponse, CreateNoteRequest, MoveNoteRequest, NoteResponse, UpdateNoteContentRequest,
    UpdateNoteTitleRequest,
};
use crate::web::error::ApiError;
use crate::web::middleware::CurrentUser;

use super::AppState;

/// GET /api/notes - List the current user's notes.
pub async fn list_notes(
    State(state): State<Arc<AppState>>,
    CurrentUser(identity): CurrentUser,
) -> Result<Json<ApiResponse<Vec<NoteResponse>>>, ApiError> {
    let notes = NoteService::new(&state.db).list(identity).await?;

    Ok(Json(ApiResponse::new(
        notes.into_iter().map(NoteResponse::from).collect(),
    )))
}

/// GET /api/folders/{id}/notes - List the notes filed in a folder.
pub async fn list_folder_notes(
    State(state): State<Arc<AppState>>,
    CurrentUser(identity): CurrentUser,
    Path(folder_id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<NoteResponse>>>, ApiError> {
    let notes = NoteService::new(&state.db)
        .list_in_folder(identity, folder_id)
        .await?;

    Ok(Json(ApiResponse::new(
        notes.into_iter().map(NoteResponse::from).collect(),
    )))
}

/// GET /api/notes/{id} - Get a single note.
pub async fn get_note(
    State(state): State<Arc<AppState>>,
    CurrentUser(identity): CurrentUser,
    Path(note_id): Path<i64>,
) -> Result<Json<ApiResponse<NoteResponse>>, ApiError> {
    let note = NoteService::new(&state.db).get(identity, note_id).await?;

    Ok(Json(ApiResponse::new(note.into())))
}

/// POST /api/notes - Create a note, optionally filed in a folder.
pub async fn create_note(
    State(state): State<Arc<AppState>>,
    CurrentUser(identity): CurrentUser,
    Json(req): Json<CreateNoteRequest>,
) -> Result<Json<ApiResponse<NoteResponse>>, ApiError> {
    req.validate().map_err(ApiError::from_validation_errors)?;

    let note = NoteService::new(&state.db)
        .create(identity, &req.title, &req.content, req.folder_id)
        .await?;

    Ok(Json(ApiResponse::new(note.into())))
}

/// PATCH /api/notes/{id}/title - Rename a note.
pub async fn update_note_title(
    State(state): State<Arc<AppState>>,
    CurrentUser(identity): CurrentUser,
    Path(note_id): Path<i64>,
    Json(req): Json<UpdateNoteTitleRequest>,
) -> Result<Json<ApiResponse<NoteResponse>>, ApiError> {
    req.validate().map_err(ApiError::from_validation_errors)?;

    let note = NoteService::new(&state.db)
        .update_title(identity, note_id, &req.title)
        .await?;

    Ok(Json(ApiResponse::new(note.into())))
}

/// PATCH /api/notes/{id}/content - Replace a note's content.
pub async fn update_note_content(
    State(state): State<Arc<AppState>>,
    CurrentUser(identity): CurrentUser,
    Path(note_id): Path<i64>,
    Json(req): Json<UpdateNoteContentRequest>,
) -> Result<Json<ApiResponse<NoteResponse>>, ApiError> {
    let note = NoteService::new(&state.db)
        .update_content(identity, note_id, &req.content)
        .await?;

    Ok(Json(ApiResponse::new(note.into())))
}

/// PUT /api/notes/{id}/move - Move a note to another folder (or unfile it).
pub async fn move_note(
    State(state): State<Arc<AppState>>,
    CurrentUser(identity): CurrentUser,
    Path(note_id): Path<i64>,
    Json(req): Json<MoveNoteRequest>,
) -> Result<Json<ApiResponse<NoteResponse>>, ApiError> {
    let note = NoteService::new(&state.db)
        .move_to_folder(identity, note_id, req.folder_id)
        .await?;

    Ok(Json(ApiResponse::new(note.into())))
}

/// DELETE /api/notes/{id} - Delete a note.
pub async fn delete_note(
    State(state): State<Arc<AppState>>,
    CurrentUser(identity): CurrentUser,
    Path(note_id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    NoteService::new(&state.db).delete(identity, note_id).await?;

    Ok(Json(ApiResponse::new(())))
}
