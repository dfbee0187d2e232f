//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to derive unique names and emails so factory-created people never collide
/// on the unique email constraint.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a person together with `count` notes authored by them.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of notes to create for the person
///
/// # Returns
/// - `Ok((person, notes))` - The created person and their notes in creation order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_person_with_notes(
    db: &DatabaseConnection,
    count: usize,
) -> Result<(entity::person::Model, Vec<entity::note::Model>), DbErr> {
    let person = crate::factory::person::create_person(db).await?;

    let mut notes = Vec::with_capacity(count);
    for _ in 0..count {
        notes.push(crate::factory::note::create_note(db, person.id).await?);
    }

    Ok((person, notes))
}
