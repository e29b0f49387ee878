//! Error types for catalog commands.

use thiserror::Error;

/// Result type alias for the catalog module.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while running catalog commands.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(transparent)]
    Store(#[from] catalogstore_core::storage::StoreError),

    #[error("operation cancelled by user")]
    UserCancelled,

    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}
