use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, SqlErr, TransactionTrait};

use crate::server::{
    data::{note::NoteRepository, person::PersonRepository},
    error::AppError,
    model::{
        note::Note,
        person::{CreatePersonParam, DeletedPerson, Person, UpdatePersonParam},
    },
    util::{transaction, validate::require_text},
};

const MISSING_FIELDS: &str = "Please fill all fields";

pub struct PersonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PersonService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every person in storage order
    pub async fn get_all(&self) -> Result<Vec<Person>, AppError> {
        Ok(PersonRepository::new(self.db).get_all().await?)
    }

    /// Gets a person by ID, failing with `NotFound` if absent
    pub async fn get_by_id(&self, id: i32) -> Result<Person, AppError> {
        PersonRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Gets the notes written by a person, failing with `NotFound` if the person is absent
    pub async fn get_notes(&self, id: i32) -> Result<Vec<Note>, AppError> {
        if !PersonRepository::new(self.db).exists(id).await? {
            return Err(not_found(id));
        }

        Ok(NoteRepository::new(self.db).get_by_author(id).await?)
    }

    /// Creates a person after validating the fields and checking the email is unused
    pub async fn create(&self, param: CreatePersonParam) -> Result<Person, AppError> {
        let name = require_text(param.name, MISSING_FIELDS)?;
        let email = require_text(param.email, MISSING_FIELDS)?;

        let txn = self.db.begin().await?;
        let result = Self::create_in(&txn, name, email).await;
        let person = transaction::finish(txn, result).await?;

        tracing::info!("Created person {} ({})", person.id, person.email);

        Ok(person)
    }

    /// Replaces a person's name and email
    ///
    /// Existence is checked before the fields are validated. Keeping the current email
    /// is allowed; taking one owned by another person is a conflict.
    pub async fn update(&self, param: UpdatePersonParam) -> Result<Person, AppError> {
        let txn = self.db.begin().await?;
        let result = Self::update_in(&txn, param).await;

        transaction::finish(txn, result).await
    }

    /// Deletes a person together with every note they wrote
    pub async fn delete(&self, id: i32) -> Result<DeletedPerson, AppError> {
        let txn = self.db.begin().await?;
        let result = Self::delete_in(&txn, id).await;
        let deleted = transaction::finish(txn, result).await?;

        tracing::info!(
            "Deleted person {} and {} of their notes",
            deleted.person.id,
            deleted.deleted_notes
        );

        Ok(deleted)
    }

    async fn create_in(
        txn: &DatabaseTransaction,
        name: String,
        email: String,
    ) -> Result<Person, AppError> {
        let repo = PersonRepository::new(txn);

        if repo.find_by_email(&email).await?.is_some() {
            return Err(email_conflict(&email));
        }

        repo.create(name, email.clone())
            .await
            .map_err(|err| map_unique_violation(err, &email))
    }

    async fn update_in(
        txn: &DatabaseTransaction,
        param: UpdatePersonParam,
    ) -> Result<Person, AppError> {
        let repo = PersonRepository::new(txn);

        if !repo.exists(param.id).await? {
            return Err(not_found(param.id));
        }

        let name = require_text(param.name, MISSING_FIELDS)?;
        let email = require_text(param.email, MISSING_FIELDS)?;

        if let Some(owner) = repo.find_by_email(&email).await? {
            if owner.id != param.id {
                return Err(email_conflict(&email));
            }
        }

        repo.update(param.id, name, email.clone())
            .await
            .map_err(|err| map_unique_violation(err, &email))?
            .ok_or_else(|| not_found(param.id))
    }

    async fn delete_in(txn: &DatabaseTransaction, id: i32) -> Result<DeletedPerson, AppError> {
        let repo = PersonRepository::new(txn);

        let person = repo.get_by_id(id).await?.ok_or_else(|| not_found(id))?;

        let deleted_notes = NoteRepository::new(txn).delete_by_author(id).await?;
        repo.delete(id).await?;

        Ok(DeletedPerson {
            person,
            deleted_notes,
        })
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Person {} not found", id))
}

fn email_conflict(email: &str) -> AppError {
    AppError::Conflict(format!("A person with email {} already exists", email))
}

/// Maps a unique constraint violation that slipped past the pre-check to a conflict.
fn map_unique_violation(err: DbErr, email: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => email_conflict(email),
        _ => AppError::DbErr(err),
    }
}
