//! Validation of request parameters shared by every transport.

use crate::error::GenerateError;

/// Validate the payload to encode. Whitespace is data; nothing is trimmed.
///
/// # Errors
///
/// Returns [`GenerateError::DataEmpty`] if `data` has zero length.
pub fn validate_data(data: &str) -> Result<(), GenerateError> {
    if data.is_empty() {
        return Err(GenerateError::DataEmpty);
    }
    Ok(())
}

/// Parse a raw `size` parameter as received by a text-based transport.
///
/// A missing or empty value means "unspecified".
///
/// # Errors
///
/// Returns an error if the value is not a non-negative integer.
pub fn parse_size(raw: Option<&str>) -> Result<Option<u32>, String> {
    match raw {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<u32>().map(Some).map_err(|_| "size must be an integer".to_string()),
    }
}
