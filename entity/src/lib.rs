//! SeaORM entity models for the notes API.
//!
//! Each module mirrors one table created by the `migration` crate. The `prelude`
//! re-exports the entity types under their table names for concise queries.

pub mod prelude;

pub mod note;
pub mod person;
