pub use super::note::Entity as Note;
pub use super::person::Entity as Person;
