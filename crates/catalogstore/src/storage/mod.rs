//! Storage backend implementations.
//!
//! This module provides concrete implementations of the
//! [`CatalogRepository`](catalogstore_core::storage::CatalogRepository)
//! trait. Backends are selected at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB backend using `aws-sdk-dynamodb`
//! - `inmemory` (default): in-memory backend for testing, interpreting the
//!   same query plans with matching scanned-count semantics

#[cfg(not(any(feature = "dynamodb", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'dynamodb' or 'inmemory'. \
    Example: cargo build -p catalogstore --features dynamodb"
);

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbCatalog;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryCatalog;

use catalogstore_core::storage::QueryCost;

/// Emits the cost record for a completed query as a structured event.
///
/// Every lookup strategy reports here exactly once, after the store
/// response arrives and before the items are handed back to the caller.
pub(crate) fn record_cost(cost: &QueryCost) {
    tracing::info!(
        strategy = cost.strategy.as_str(),
        scanned_count = cost.scanned_count,
        "query cost"
    );
}
