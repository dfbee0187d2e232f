use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, SqlErr, TransactionTrait};

use crate::server::{
    data::{note::NoteRepository, person::PersonRepository},
    error::AppError,
    model::note::{CreateNoteParam, Note, UpdateNoteParam},
    util::{transaction, validate::require_text},
};

const MISSING_FIELDS: &str = "Missing author_id or content";
const MISSING_CONTENT: &str = "Missing content";

pub struct NoteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NoteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every note in storage order
    pub async fn get_all(&self) -> Result<Vec<Note>, AppError> {
        Ok(NoteRepository::new(self.db).get_all().await?)
    }

    /// Gets a note by ID, failing with `NotFound` if absent
    pub async fn get_by_id(&self, id: i32) -> Result<Note, AppError> {
        NoteRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Creates a note for an existing author
    ///
    /// Fails with `BadRequest` when a field is missing or the author doesn't exist.
    pub async fn create(&self, param: CreateNoteParam) -> Result<Note, AppError> {
        let content = require_text(param.content, MISSING_FIELDS)?;
        let author_id = param
            .author_id
            .ok_or_else(|| AppError::BadRequest(MISSING_FIELDS.to_string()))?;

        let txn = self.db.begin().await?;
        let result = Self::create_in(&txn, author_id, content).await;
        let note = transaction::finish(txn, result).await?;

        tracing::info!("Created note {} for person {}", note.id, note.author_id);

        Ok(note)
    }

    /// Replaces a note's content, refreshing its timestamp
    ///
    /// The content is validated before existence is checked.
    pub async fn update(&self, param: UpdateNoteParam) -> Result<Note, AppError> {
        let content = require_text(param.content, MISSING_CONTENT)?;

        let txn = self.db.begin().await?;
        let result = NoteRepository::new(&txn)
            .update(param.id, content)
            .await
            .map_err(AppError::from)
            .and_then(|note| note.ok_or_else(|| not_found(param.id)));

        transaction::finish(txn, result).await
    }

    /// Deletes a note
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let result = match NoteRepository::new(&txn).delete(id).await {
            Ok(0) => Err(not_found(id)),
            Ok(_) => Ok(()),
            Err(err) => Err(err.into()),
        };
        transaction::finish(txn, result).await?;

        tracing::info!("Deleted note {}", id);

        Ok(())
    }

    async fn create_in(
        txn: &DatabaseTransaction,
        author_id: i32,
        content: String,
    ) -> Result<Note, AppError> {
        if !PersonRepository::new(txn).exists(author_id).await? {
            return Err(author_missing(author_id));
        }

        NoteRepository::new(txn)
            .create(author_id, content)
            .await
            .map_err(|err| map_foreign_key_violation(err, author_id))
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Note {} not found", id))
}

fn author_missing(author_id: i32) -> AppError {
    AppError::BadRequest(format!("Author {} does not exist", author_id))
}

/// Maps a foreign key violation that slipped past the author pre-check.
fn map_foreign_key_violation(err: DbErr, author_id: i32) -> AppError {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => author_missing(author_id),
        _ => AppError::DbErr(err),
    }
}
