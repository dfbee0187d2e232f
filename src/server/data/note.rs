//! Note data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::note::Note;

/// Repository providing database operations for notes.
pub struct NoteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NoteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new note for an author.
    ///
    /// # Arguments
    /// - `author_id` - ID of the owning person
    /// - `content` - Note content
    ///
    /// # Returns
    /// - `Ok(Note)` - The created note with generated ID
    /// - `Err(DbErr)` - Database error, including foreign key violations for unknown authors
    pub async fn create(&self, author_id: i32, content: String) -> Result<Note, DbErr> {
        let entity = entity::note::ActiveModel {
            content: ActiveValue::Set(content),
            created_at: ActiveValue::Set(Utc::now()),
            author_id: ActiveValue::Set(author_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Note::from_entity(entity))
    }

    /// Gets all notes ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Note>, DbErr> {
        let entities = entity::prelude::Note::find()
            .order_by_asc(entity::note::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Note::from_entity).collect())
    }

    /// Gets a note by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Note>, DbErr> {
        let entity = entity::prelude::Note::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Note::from_entity))
    }

    /// Gets every note written by an author, ordered by ID.
    pub async fn get_by_author(&self, author_id: i32) -> Result<Vec<Note>, DbErr> {
        let entities = entity::prelude::Note::find()
            .filter(entity::note::Column::AuthorId.eq(author_id))
            .order_by_asc(entity::note::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Note::from_entity).collect())
    }

    /// Replaces a note's content and refreshes its timestamp.
    ///
    /// The ID and author are never changed.
    ///
    /// # Returns
    /// - `Ok(Some(Note))` - The updated note
    /// - `Ok(None)` - No note with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, content: String) -> Result<Option<Note>, DbErr> {
        let Some(note) = entity::prelude::Note::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::note::ActiveModel = note.into();
        active_model.content = ActiveValue::Set(content);
        active_model.created_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Note::from_entity(entity)))
    }

    /// Deletes a note.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 when the note didn't exist)
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Note::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every note written by an author.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of notes deleted
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete_by_author(&self, author_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Note::delete_many()
            .filter(entity::note::Column::AuthorId.eq(author_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
