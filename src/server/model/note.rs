//! Domain models and parameters for note operations.

use chrono::{DateTime, Utc};

use crate::model::note::{CreateNoteDto, NoteDto, UpdateNoteDto};

/// A note as seen by the service layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub id: i32,
    pub content: String,
    /// Set on creation and refreshed on every content update.
    pub created_at: DateTime<Utc>,
    /// ID of the owning person.
    pub author_id: i32,
}

impl Note {
    /// Converts an entity model to a note at the repository boundary.
    pub fn from_entity(entity: entity::note::Model) -> Self {
        Self {
            id: entity.id,
            content: entity.content,
            created_at: entity.created_at,
            author_id: entity.author_id,
        }
    }

    /// Converts the note to a DTO for API responses.
    pub fn into_dto(self) -> NoteDto {
        NoteDto {
            id: self.id,
            author_id: self.author_id,
            content: self.content,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a note, validated by the service.
#[derive(Debug, Clone, Default)]
pub struct CreateNoteParam {
    pub content: Option<String>,
    pub author_id: Option<i32>,
}

impl CreateNoteParam {
    pub fn from_dto(dto: CreateNoteDto) -> Self {
        Self {
            content: dto.content,
            author_id: dto.author_id,
        }
    }
}

/// Parameters for replacing a note's content.
#[derive(Debug, Clone, Default)]
pub struct UpdateNoteParam {
    /// ID of the note to update.
    pub id: i32,
    pub content: Option<String>,
}

impl UpdateNoteParam {
    pub fn from_dto(id: i32, dto: UpdateNoteDto) -> Self {
        Self {
            id,
            content: dto.content,
        }
    }
}
