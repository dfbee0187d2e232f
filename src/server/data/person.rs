//! Person data repository for database operations.
//!
//! This module provides the `PersonRepository` for managing person records. It handles
//! creation, queries, updates and deletion with conversion between entity models and
//! domain models at the infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::person::Person;

/// Repository providing database operations for people.
///
/// Generic over the connection so the same queries run against the pool or inside a
/// transaction opened by the service layer.
pub struct PersonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PersonRepository<'a, C> {
    /// Creates a new PersonRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new person stamped with the current time.
    ///
    /// # Arguments
    /// - `name` - Display name
    /// - `email` - Email address, must not be used by another person
    ///
    /// # Returns
    /// - `Ok(Person)` - The created person with generated ID
    /// - `Err(DbErr)` - Database error, including unique constraint violations on email
    pub async fn create(&self, name: String, email: String) -> Result<Person, DbErr> {
        let entity = entity::person::ActiveModel {
            name: ActiveValue::Set(name),
            email: ActiveValue::Set(email),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Person::from_entity(entity))
    }

    /// Gets all people ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Person>, DbErr> {
        let entities = entity::prelude::Person::find()
            .order_by_asc(entity::person::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Person::from_entity).collect())
    }

    /// Gets a person by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Person))` - Person found
    /// - `Ok(None)` - No person with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Person>, DbErr> {
        let entity = entity::prelude::Person::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Person::from_entity))
    }

    /// Finds the person owning an email address.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Person>, DbErr> {
        let entity = entity::prelude::Person::find()
            .filter(entity::person::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Person::from_entity))
    }

    /// Checks whether a person with the given ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Person::find()
            .filter(entity::person::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Replaces a person's name and email.
    ///
    /// The creation timestamp is left untouched.
    ///
    /// # Returns
    /// - `Ok(Some(Person))` - The updated person
    /// - `Ok(None)` - No person with that ID
    /// - `Err(DbErr)` - Database error, including unique constraint violations on email
    pub async fn update(
        &self,
        id: i32,
        name: String,
        email: String,
    ) -> Result<Option<Person>, DbErr> {
        let Some(person) = entity::prelude::Person::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::person::ActiveModel = person.into();
        active_model.name = ActiveValue::Set(name);
        active_model.email = ActiveValue::Set(email);

        let entity = active_model.update(self.db).await?;

        Ok(Some(Person::from_entity(entity)))
    }

    /// Deletes a person.
    ///
    /// Notes authored by the person are removed by the `ON DELETE CASCADE` foreign key.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 when the person didn't exist)
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Person::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
