use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        note::{CreateNoteDto, NoteDto, UpdateNoteDto},
    },
    server::{
        error::AppError,
        model::note::{CreateNoteParam, UpdateNoteParam},
        service::note::NoteService,
        state::AppState,
    },
};

/// Tag for grouping note endpoints in OpenAPI documentation
pub static NOTE_TAG: &str = "note";

/// Return all notes.
#[utoipa::path(
    get,
    path = "/note",
    tag = NOTE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved notes", body = Vec<NoteDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notes(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let notes = NoteService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(notes.into_iter().map(|n| n.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create a note.
///
/// Requires `content` and the `author_id` of an existing person.
///
/// # Returns
/// - `201 Created` - Successfully created note
/// - `400 Bad Request` - Missing fields or author does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/note",
    tag = NOTE_TAG,
    request_body = CreateNoteDto,
    responses(
        (status = 201, description = "Successfully created note", body = NoteDto),
        (status = 400, description = "Missing fields or author does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<CreateNoteDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let note = NoteService::new(&state.db)
        .create(CreateNoteParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(note.into_dto())))
}

/// Return a note by ID.
#[utoipa::path(
    get,
    path = "/note/{id}",
    tag = NOTE_TAG,
    params(
        ("id" = i32, Path, description = "Note ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved note", body = NoteDto),
        (status = 404, description = "Note not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_note(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let note = NoteService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(note.into_dto())))
}

/// Update a note's content.
///
/// Refreshes the note's timestamp; the author cannot be changed.
///
/// # Returns
/// - `200 OK` - Successfully updated note
/// - `400 Bad Request` - Missing content
/// - `404 Not Found` - No note with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/note/{id}",
    tag = NOTE_TAG,
    params(
        ("id" = i32, Path, description = "Note ID")
    ),
    request_body = UpdateNoteDto,
    responses(
        (status = 200, description = "Successfully updated note", body = NoteDto),
        (status = 400, description = "Missing content", body = ErrorDto),
        (status = 404, description = "Note not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_note(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateNoteDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;

    let note = NoteService::new(&state.db)
        .update(UpdateNoteParam::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(note.into_dto())))
}

/// Delete a note.
#[utoipa::path(
    delete,
    path = "/note/{id}",
    tag = NOTE_TAG,
    params(
        ("id" = i32, Path, description = "Note ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted note", body = MessageDto),
        (status = 404, description = "Note not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_note(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    NoteService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Note deleted successfully".to_string(),
        }),
    ))
}
