//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Validation**: Rejecting requests with missing fields before touching storage
//! - **Business Rules**: Email uniqueness and note ownership pre-checks
//! - **Transaction Management**: One transaction per write, committed on success and
//!   rolled back on any error

pub mod note;
pub mod person;

#[cfg(test)]
mod test;
