pub mod transaction;
pub mod validate;
