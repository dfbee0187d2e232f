use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PersonDto {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Request body for `POST /people`.
///
/// Fields are optional so that missing values surface as validation errors
/// instead of deserialization rejections.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct CreatePersonDto {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Request body for `PUT /people/{id}`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdatePersonDto {
    pub name: Option<String>,
    pub email: Option<String>,
}
