//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry request data
//! from controllers into the service layer, where it is validated.

pub mod note;
pub mod person;
