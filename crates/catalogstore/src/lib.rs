//! Product catalog data-access layer.
//!
//! Implements the `catalogstore_core` repository abstractions against
//! DynamoDB, plus an in-memory backend with matching query-cost semantics
//! for tests.

pub mod storage;
