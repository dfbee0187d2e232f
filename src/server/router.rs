use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{note, person},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Notes APP API",
        version = "1.0.0",
        description = "A Note app where users can create, read, update and delete their notes."
    ),
    tags(
        (name = "people", description = "People operations"),
        (name = "note", description = "Note operations")
    )
)]
struct ApiDoc;

/// Builds the application router with every API route plus the OpenAPI document
/// (`/api-docs/openapi.json`) and Swagger UI (`/docs`).
pub fn router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::<AppState>::with_openapi(ApiDoc::openapi())
        .routes(routes!(person::get_people, person::create_person))
        .routes(routes!(
            person::get_person,
            person::update_person,
            person::delete_person
        ))
        .routes(routes!(person::get_person_notes))
        .routes(routes!(note::get_notes, note::create_note))
        .routes(routes!(note::get_note, note::update_note, note::delete_note))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api))
        .with_state(state)
}
