//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `StoreError` from `catalogstore_core::storage`.
//! Nothing is retried here; every failure surfaces to the caller.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::create_table::CreateTableError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::query::QueryError;
use catalogstore_core::storage::StoreError;

/// Map a CreateTable SDK error to StoreError.
pub fn map_create_table_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<CreateTableError, R>,
    table_name: &str,
) -> StoreError {
    match err.into_service_error() {
        CreateTableError::ResourceInUseException(_) => StoreError::SchemaAlreadyExists {
            table: table_name.to_string(),
        },
        CreateTableError::LimitExceededException(_) => {
            StoreError::Unavailable("table limit exceeded, please retry".to_string())
        }
        CreateTableError::InternalServerError(_) => {
            StoreError::Unavailable("DynamoDB internal server error".to_string())
        }
        err => unmodeled("CreateTable", &err),
    }
}

/// Map a PutItem SDK error to StoreError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> StoreError {
    match err.into_service_error() {
        PutItemError::ResourceNotFoundException(_) => {
            StoreError::Unavailable("table not found".to_string())
        }
        PutItemError::ProvisionedThroughputExceededException(_) => {
            StoreError::Unavailable("throughput exceeded, please retry".to_string())
        }
        PutItemError::RequestLimitExceeded(_) => {
            StoreError::Unavailable("request limit exceeded, please retry".to_string())
        }
        PutItemError::InternalServerError(_) => {
            StoreError::Unavailable("DynamoDB internal server error".to_string())
        }
        err => unmodeled("PutItem", &err),
    }
}

/// Map a Query SDK error to StoreError.
pub fn map_query_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<QueryError, R>,
) -> StoreError {
    match err.into_service_error() {
        QueryError::ResourceNotFoundException(_) => {
            StoreError::Unavailable("table not found".to_string())
        }
        QueryError::ProvisionedThroughputExceededException(_) => {
            StoreError::Unavailable("throughput exceeded, please retry".to_string())
        }
        QueryError::RequestLimitExceeded(_) => {
            StoreError::Unavailable("request limit exceeded, please retry".to_string())
        }
        QueryError::InternalServerError(_) => {
            StoreError::Unavailable("DynamoDB internal server error".to_string())
        }
        err => unmodeled("Query", &err),
    }
}

/// Failures the SDK does not model as typed variants land here: transport
/// failures, timeouts, and server-side ValidationException (malformed
/// numeric encoding among them) all arrive as the unhandled variant.
fn unmodeled(operation: &str, err: &impl Debug) -> StoreError {
    let detail = format!("{:?}", err);
    if detail.contains("ValidationException") {
        StoreError::Validation(format!("{} rejected: {}", operation, detail))
    } else {
        StoreError::Unavailable(format!("{} failed: {}", operation, detail))
    }
}
