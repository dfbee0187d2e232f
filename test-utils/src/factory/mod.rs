//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let person = factory::create_person(&db).await?;
//!     let note = factory::create_note(&db, person.id).await?;
//!
//!     let (person, notes) = factory::helpers::create_person_with_notes(&db, 3).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let person = factory::person::PersonFactory::new(&db)
//!     .name("Ana")
//!     .email("a@x.com")
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod note;
pub mod person;

pub use note::create_note;
pub use person::create_person;
