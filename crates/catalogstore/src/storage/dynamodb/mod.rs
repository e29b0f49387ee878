//! DynamoDB storage backend implementation.
//!
//! This module provides the DynamoDB-based implementation of the catalog
//! repository using `aws-sdk-dynamodb`.

mod client;
mod conversions;
mod error;
mod provision;
mod repository;

pub use client::StoreConfig;
pub use repository::DynamoDbCatalog;
