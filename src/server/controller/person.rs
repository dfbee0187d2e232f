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
        note::NoteDto,
        person::{CreatePersonDto, PersonDto, UpdatePersonDto},
    },
    server::{
        error::AppError,
        model::person::{CreatePersonParam, UpdatePersonParam},
        service::person::PersonService,
        state::AppState,
    },
};

/// Tag for grouping people endpoints in OpenAPI documentation
pub static PEOPLE_TAG: &str = "people";

/// Return all people.
///
/// # Returns
/// - `200 OK` - Every person in storage order
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/people",
    tag = PEOPLE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved people", body = Vec<PersonDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_people(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let people = PersonService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(people.into_iter().map(|p| p.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create a person.
///
/// Both `name` and `email` are required and the email must not belong to another
/// person.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Person creation data (name and email)
///
/// # Returns
/// - `201 Created` - Successfully created person
/// - `400 Bad Request` - Missing fields or email already in use
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/people",
    tag = PEOPLE_TAG,
    request_body = CreatePersonDto,
    responses(
        (status = 201, description = "Successfully created person", body = PersonDto),
        (status = 400, description = "Missing fields or email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_person(
    State(state): State<AppState>,
    payload: Result<Json<CreatePersonDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let param = CreatePersonParam::from_dto(payload);
    let person = PersonService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(person.into_dto())))
}

/// Return a person by ID.
///
/// # Returns
/// - `200 OK` - The person
/// - `404 Not Found` - No person with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/people/{id}",
    tag = PEOPLE_TAG,
    params(
        ("id" = i32, Path, description = "Person ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved person", body = PersonDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let person = PersonService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(person.into_dto())))
}

/// Update a person's name and email.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Person ID to update
/// - `payload` - Replacement name and email
///
/// # Returns
/// - `200 OK` - Successfully updated person
/// - `400 Bad Request` - Missing fields or email used by another person
/// - `404 Not Found` - No person with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/people/{id}",
    tag = PEOPLE_TAG,
    params(
        ("id" = i32, Path, description = "Person ID")
    ),
    request_body = UpdatePersonDto,
    responses(
        (status = 200, description = "Successfully updated person", body = PersonDto),
        (status = 400, description = "Missing fields or email already in use", body = ErrorDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_person(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdatePersonDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;

    let param = UpdatePersonParam::from_dto(id, payload);
    let person = PersonService::new(&state.db).update(param).await?;

    Ok((StatusCode::OK, Json(person.into_dto())))
}

/// Delete a person and all of their notes.
///
/// # Returns
/// - `200 OK` - Person and notes deleted
/// - `404 Not Found` - No person with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/people/{id}",
    tag = PEOPLE_TAG,
    params(
        ("id" = i32, Path, description = "Person ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted person", body = MessageDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_person(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let deleted = PersonService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Person {} deleted successfully", deleted.person.name),
        }),
    ))
}

/// Return the notes written by a person.
///
/// # Returns
/// - `200 OK` - The person's notes in storage order
/// - `404 Not Found` - No person with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/people/{id}/notes",
    tag = PEOPLE_TAG,
    params(
        ("id" = i32, Path, description = "Person ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved notes", body = Vec<NoteDto>),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person_notes(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let notes = PersonService::new(&state.db).get_notes(id).await?;

    Ok((
        StatusCode::OK,
        Json(notes.into_iter().map(|n| n.into_dto()).collect::<Vec<_>>()),
    ))
}
