mod note;
mod person;
