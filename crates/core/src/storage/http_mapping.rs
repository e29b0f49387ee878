//! Pure functions for mapping store errors to HTTP status codes.
//!
//! The transport layer is out of scope for this crate, but it needs a
//! status code for every [`StoreError`] variant; keeping the mapping here
//! keeps it next to the taxonomy it covers.

use super::StoreError;

/// Maps a [`StoreError`] to an HTTP status code.
///
/// - `SchemaAlreadyExists` -> 409 (Conflict)
/// - `Validation` -> 400 (Bad Request)
/// - `Unavailable` -> 503 (Service Unavailable)
///
/// Zero-match lookups never produce an error, so there is no 404 mapping;
/// the transport derives it from an empty result.
pub fn store_error_to_status_code(error: &StoreError) -> u16 {
    match error {
        StoreError::SchemaAlreadyExists { .. } => 409,
        StoreError::Validation(_) => 400,
        StoreError::Unavailable(_) => 503,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_already_exists_maps_to_409() {
        let error = StoreError::SchemaAlreadyExists {
            table: "products".to_string(),
        };
        assert_eq!(store_error_to_status_code(&error), 409);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let error = StoreError::Validation("attribute status must be an integer".to_string());
        assert_eq!(store_error_to_status_code(&error), 400);
    }

    #[test]
    fn test_unavailable_maps_to_503() {
        let error = StoreError::Unavailable("request timed out".to_string());
        assert_eq!(store_error_to_status_code(&error), 503);
    }
}
