mod error;
mod http_mapping;
mod query;
mod traits;

pub use error::{Result, StoreError};
pub use http_mapping::store_error_to_status_code;
pub use query::{KeyCondition, LookupStrategy, QueryCost, QueryPlan, StatusFilter};
pub use traits::CatalogRepository;
