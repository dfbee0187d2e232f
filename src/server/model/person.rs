//! Domain models and parameters for person operations.
//!
//! `Person` is converted from the entity model at the repository boundary and into
//! `PersonDto` at the controller boundary, so entity models never reach the service
//! or controller layers.

use chrono::{DateTime, Utc};

use crate::model::person::{CreatePersonDto, PersonDto, UpdatePersonDto};

/// A person as seen by the service layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    /// Unique identifier for the person.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Email address, unique across all people.
    pub email: String,
    /// When the person was created.
    pub created_at: DateTime<Utc>,
}

impl Person {
    /// Converts an entity model to a person.
    ///
    /// # Arguments
    /// - `entity`: The entity model from the database
    ///
    /// # Returns
    /// - `Person`: The converted domain model
    pub fn from_entity(entity: entity::person::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            created_at: entity.created_at,
        }
    }

    /// Converts the person to a DTO for API responses.
    pub fn into_dto(self) -> PersonDto {
        PersonDto {
            id: self.id,
            name: self.name,
            email: self.email,
        }
    }
}

/// Parameters for creating a person.
///
/// Fields are kept optional until the service validates them.
#[derive(Debug, Clone, Default)]
pub struct CreatePersonParam {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl CreatePersonParam {
    pub fn from_dto(dto: CreatePersonDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
        }
    }
}

/// Parameters for replacing a person's name and email.
#[derive(Debug, Clone, Default)]
pub struct UpdatePersonParam {
    /// ID of the person to update.
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UpdatePersonParam {
    pub fn from_dto(id: i32, dto: UpdatePersonDto) -> Self {
        Self {
            id,
            name: dto.name,
            email: dto.email,
        }
    }
}

/// Outcome of deleting a person.
#[derive(Debug, Clone, PartialEq)]
pub struct DeletedPerson {
    /// The person that was removed.
    pub person: Person,
    /// Number of notes removed along with the person.
    pub deleted_notes: u64,
}
