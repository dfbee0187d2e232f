use crate::server::error::AppError;

/// Returns the value of a required text field.
///
/// A field counts as missing when it is absent, empty, or only whitespace.
///
/// # Arguments
/// - `value` - The optional field value from the request
/// - `message` - Error message reported when the field is missing
///
/// # Returns
/// - `Ok(String)` - The field value, unchanged
/// - `Err(AppError::BadRequest)` - The field is missing
pub fn require_text(value: Option<String>, message: &str) -> Result<String, AppError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(AppError::BadRequest(message.to_string())),
    }
}
