//! Wire-level data transfer objects for the HTTP API.

pub mod api;
pub mod note;
pub mod person;
