use thiserror::Error;

use crate::product::ItemError;

/// Errors that can occur during catalog store operations.
///
/// Zero-match lookups are not errors: they come back as `None` or an empty
/// `Vec` from the repository methods.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("schema already exists for table: {table}")]
    SchemaAlreadyExists { table: String },
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for catalog store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

impl From<ItemError> for StoreError {
    fn from(err: ItemError) -> Self {
        StoreError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_already_exists_display() {
        let error = StoreError::SchemaAlreadyExists {
            table: "products".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "schema already exists for table: products"
        );
    }

    #[test]
    fn test_validation_display() {
        let error = StoreError::Validation("attribute Amount is not numeric".to_string());
        assert_eq!(
            error.to_string(),
            "validation failed: attribute Amount is not numeric"
        );
    }

    #[test]
    fn test_unavailable_display() {
        let error = StoreError::Unavailable("dispatch failure".to_string());
        assert_eq!(error.to_string(), "store unavailable: dispatch failure");
    }

    #[test]
    fn test_item_error_converts_to_validation() {
        let error: StoreError = ItemError::MissingAttribute("value").into();
        assert_eq!(
            error,
            StoreError::Validation("missing attribute: value".to_string())
        );
    }
}
