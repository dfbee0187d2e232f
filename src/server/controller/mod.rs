//! HTTP request handlers.
//!
//! Controllers extract path parameters and JSON bodies, convert DTOs into service
//! parameters, call the service layer and convert domain models back into DTOs.

pub mod note;
pub mod person;

#[cfg(test)]
mod test;
