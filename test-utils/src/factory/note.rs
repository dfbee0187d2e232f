//! Note factory for creating test note entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test notes with customizable fields.
///
/// The author must already exist; use `factory::create_person` first.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::note::NoteFactory;
///
/// let note = NoteFactory::new(&db, person.id)
///     .content("hi")
///     .build()
///     .await?;
/// ```
pub struct NoteFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: i32,
    content: String,
    created_at: DateTime<Utc>,
}

impl<'a> NoteFactory<'a> {
    /// Creates a new NoteFactory with default values.
    ///
    /// Defaults:
    /// - content: `"Note {id}"` where id is auto-incremented
    /// - created_at: current time
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        Self {
            db,
            author_id,
            content: format!("Note {}", next_id()),
            created_at: Utc::now(),
        }
    }

    /// Sets the content of the note.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the creation timestamp of the note.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the note entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::note::Model)` - Created note entity
    /// - `Err(DbErr)` - Database error during insert (e.g. unknown author)
    pub async fn build(self) -> Result<entity::note::Model, DbErr> {
        entity::note::ActiveModel {
            content: ActiveValue::Set(self.content),
            created_at: ActiveValue::Set(self.created_at),
            author_id: ActiveValue::Set(self.author_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a note with default values for the given author.
///
/// Shorthand for `NoteFactory::new(db, author_id).build().await`.
pub async fn create_note(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::note::Model, DbErr> {
    NoteFactory::new(db, author_id).build().await
}
