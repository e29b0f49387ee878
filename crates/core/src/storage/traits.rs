use async_trait::async_trait;

use crate::product::Item;

use super::Result;

/// The caller-facing catalog surface.
///
/// Each lookup maps a logical intent onto one physical access pattern and
/// emits a cost record tagged with the strategy that ran. Items come back
/// exactly as the store returned them: no client-side re-filtering, no
/// re-sorting.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Creates the table schema: `(id, category)` primary key plus the
    /// secondary index on `value`. One-time provisioning; invoking it again
    /// surfaces [`StoreError::SchemaAlreadyExists`](super::StoreError).
    async fn create_schema(&self) -> Result<()>;

    /// Writes the item at key `(id, category)`, replacing any earlier item
    /// stored under the same pair.
    async fn insert_item(&self, item: &Item) -> Result<()>;

    /// Lookup by partition key alone. The table key is composite, so this
    /// returns the first item of the `id` partition, or `None`.
    async fn lookup_by_primary_key(&self, id: &str) -> Result<Option<Item>>;

    /// Lookup by the full `(id, category)` key. At most one item under the
    /// uniqueness invariant.
    async fn lookup_by_composite_key(&self, id: &str, category: &str) -> Result<Vec<Item>>;

    /// Lookup through the secondary index: every item with exactly this
    /// `value`.
    async fn lookup_by_index_value(&self, value: i64) -> Result<Vec<Item>>;

    /// Lookup through the secondary index with a residual `status` filter.
    /// The expensive path: the store scans the whole value partition before
    /// filtering.
    async fn lookup_by_index_value_and_status(&self, status: i64, value: i64)
        -> Result<Vec<Item>>;
}
