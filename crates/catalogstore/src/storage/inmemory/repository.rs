//! In-memory catalog implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use catalogstore_core::product::Item;
use catalogstore_core::storage::{
    CatalogRepository, KeyCondition, QueryCost, QueryPlan, Result, StoreError,
};

use crate::storage::record_cost;

const TABLE_NAME: &str = "products";

/// In-memory catalog backend for testing.
///
/// Interprets the same query plans as the DynamoDB backend with matching
/// cost semantics: the key condition narrows the candidate set, the
/// residual filter runs afterwards and never reduces the scanned count.
/// Data is not persisted and is lost when the catalog is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    schema_created: bool,
    /// Items keyed by `(id, category)`; iteration follows native key order.
    items: BTreeMap<(String, String), Item>,
    /// Every cost record emitted so far, oldest first.
    costs: Vec<QueryCost>,
}

impl InMemoryCatalog {
    /// Creates a new empty in-memory catalog. The schema still has to be
    /// provisioned through `create_schema`, like the real store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cost records emitted so far, oldest first. One record per lookup.
    pub async fn query_costs(&self) -> Vec<QueryCost> {
        self.inner.read().await.costs.clone()
    }

    /// Executes a plan against the current contents, recording its cost.
    async fn run(&self, plan: QueryPlan) -> Result<Vec<Item>> {
        let mut inner = self.inner.write().await;

        if !inner.schema_created {
            return Err(missing_table());
        }

        // Key condition first: only the matching partition is examined.
        let candidates: Vec<Item> = match &plan.key {
            KeyCondition::IdEquals { id } => inner
                .items
                .values()
                .filter(|item| item.id == *id)
                .cloned()
                .collect(),
            KeyCondition::IdAndCategoryEqual { id, category } => inner
                .items
                .get(&(id.clone(), category.clone()))
                .cloned()
                .into_iter()
                .collect(),
            // The value index has no sort key, so partition-internal order
            // is unspecified; this backend yields base-table key order.
            KeyCondition::ValueEquals { value } => inner
                .items
                .values()
                .filter(|item| item.value == *value)
                .cloned()
                .collect(),
        };

        // The residual filter runs over everything the key condition
        // matched; the scanned count is fixed before it applies.
        let scanned_count = candidates.len() as i32;
        let items: Vec<Item> = match plan.filter {
            Some(filter) => candidates
                .into_iter()
                .filter(|item| item.status == filter.status)
                .collect(),
            None => candidates,
        };

        let cost = QueryCost {
            strategy: plan.strategy,
            scanned_count,
        };
        record_cost(&cost);
        inner.costs.push(cost);

        Ok(items)
    }
}

fn missing_table() -> StoreError {
    StoreError::Unavailable(format!("table not found: {}", TABLE_NAME))
}

#[async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn create_schema(&self) -> Result<()> {
        let mut inner = self.inner.write().await;

        if inner.schema_created {
            return Err(StoreError::SchemaAlreadyExists {
                table: TABLE_NAME.to_string(),
            });
        }

        inner.schema_created = true;
        Ok(())
    }

    async fn insert_item(&self, item: &Item) -> Result<()> {
        let mut inner = self.inner.write().await;

        if !inner.schema_created {
            return Err(missing_table());
        }

        inner
            .items
            .insert((item.id.clone(), item.category.clone()), item.clone());
        Ok(())
    }

    async fn lookup_by_primary_key(&self, id: &str) -> Result<Option<Item>> {
        let items = self.run(QueryPlan::by_primary_key(id)).await?;
        Ok(items.into_iter().next())
    }

    async fn lookup_by_composite_key(&self, id: &str, category: &str) -> Result<Vec<Item>> {
        self.run(QueryPlan::by_composite_key(id, category)).await
    }

    async fn lookup_by_index_value(&self, value: i64) -> Result<Vec<Item>> {
        self.run(QueryPlan::by_index_value(value)).await
    }

    async fn lookup_by_index_value_and_status(
        &self,
        status: i64,
        value: i64,
    ) -> Result<Vec<Item>> {
        self.run(QueryPlan::by_index_value_and_status(status, value))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalogstore_core::storage::LookupStrategy;

    async fn provisioned() -> InMemoryCatalog {
        let catalog = InMemoryCatalog::new();
        catalog.create_schema().await.unwrap();
        catalog
    }

    #[tokio::test]
    async fn test_insert_and_composite_lookup_round_trips() {
        let catalog = provisioned().await;
        let item = Item::new("a", "c1", 10, 1);

        catalog.insert_item(&item).await.unwrap();
        let found = catalog.lookup_by_composite_key("a", "c1").await.unwrap();

        assert_eq!(found, vec![item]);
    }

    #[tokio::test]
    async fn test_inserting_same_key_replaces_the_item() {
        let catalog = provisioned().await;

        catalog.insert_item(&Item::new("a", "c1", 10, 1)).await.unwrap();
        catalog.insert_item(&Item::new("a", "c1", 20, 2)).await.unwrap();

        let found = catalog.lookup_by_composite_key("a", "c1").await.unwrap();
        assert_eq!(found, vec![Item::new("a", "c1", 20, 2)]);
    }

    #[tokio::test]
    async fn test_primary_key_lookup_returns_first_item_of_the_partition() {
        let catalog = provisioned().await;

        catalog.insert_item(&Item::new("a", "c2", 20, 2)).await.unwrap();
        catalog.insert_item(&Item::new("a", "c1", 10, 1)).await.unwrap();

        // Partial key: the whole partition matches, the caller takes the
        // first in key order.
        let found = catalog.lookup_by_primary_key("a").await.unwrap();
        assert_eq!(found, Some(Item::new("a", "c1", 10, 1)));

        let costs = catalog.query_costs().await;
        assert_eq!(costs.last().unwrap().strategy, LookupStrategy::PrimaryKey);
        assert_eq!(costs.last().unwrap().scanned_count, 2);
    }

    #[tokio::test]
    async fn test_composite_key_distinguishes_items_sharing_an_id() {
        let catalog = provisioned().await;

        catalog.insert_item(&Item::new("a", "c1", 10, 1)).await.unwrap();
        catalog.insert_item(&Item::new("a", "c2", 20, 2)).await.unwrap();

        let c1 = catalog.lookup_by_composite_key("a", "c1").await.unwrap();
        let c2 = catalog.lookup_by_composite_key("a", "c2").await.unwrap();

        assert_eq!(c1, vec![Item::new("a", "c1", 10, 1)]);
        assert_eq!(c2, vec![Item::new("a", "c2", 20, 2)]);
    }

    #[tokio::test]
    async fn test_index_lookup_returns_all_items_sharing_a_value() {
        let catalog = provisioned().await;

        catalog.insert_item(&Item::new("a", "c1", 10, 1)).await.unwrap();
        catalog.insert_item(&Item::new("b", "c1", 10, 2)).await.unwrap();
        catalog.insert_item(&Item::new("c", "c1", 99, 1)).await.unwrap();

        let found = catalog.lookup_by_index_value(10).await.unwrap();

        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|item| item.value == 10));

        // No filter: the whole predicate is in the key condition, so the
        // scanned count equals the returned count.
        let costs = catalog.query_costs().await;
        assert_eq!(costs.last().unwrap().strategy, LookupStrategy::IndexValue);
        assert_eq!(costs.last().unwrap().scanned_count, 2);
    }

    #[tokio::test]
    async fn test_status_filter_scans_the_whole_value_partition() {
        let catalog = provisioned().await;

        catalog.insert_item(&Item::new("a", "c1", 10, 1)).await.unwrap();
        catalog.insert_item(&Item::new("a", "c2", 10, 2)).await.unwrap();

        let found = catalog
            .lookup_by_index_value_and_status(1, 10)
            .await
            .unwrap();

        assert_eq!(found, vec![Item::new("a", "c1", 10, 1)]);

        // Both items share the value, so both were scanned before the
        // status filter dropped one.
        let costs = catalog.query_costs().await;
        assert_eq!(
            costs.last().unwrap().strategy,
            LookupStrategy::IndexValueFiltered
        );
        assert_eq!(costs.last().unwrap().scanned_count, 2);
    }

    #[tokio::test]
    async fn test_zero_match_lookups_are_not_errors() {
        let catalog = provisioned().await;

        assert_eq!(catalog.lookup_by_primary_key("missing").await.unwrap(), None);
        assert_eq!(
            catalog
                .lookup_by_composite_key("missing", "x")
                .await
                .unwrap(),
            Vec::new()
        );
        assert_eq!(catalog.lookup_by_index_value(404).await.unwrap(), Vec::new());
    }

    #[tokio::test]
    async fn test_create_schema_twice_errors() {
        let catalog = InMemoryCatalog::new();

        catalog.create_schema().await.unwrap();
        let second = catalog.create_schema().await;

        assert_eq!(
            second,
            Err(StoreError::SchemaAlreadyExists {
                table: "products".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_item_operations_require_a_provisioned_schema() {
        let catalog = InMemoryCatalog::new();

        let insert = catalog.insert_item(&Item::new("a", "c1", 10, 1)).await;
        assert!(matches!(insert, Err(StoreError::Unavailable(_))));

        let lookup = catalog.lookup_by_primary_key("a").await;
        assert!(matches!(lookup, Err(StoreError::Unavailable(_))));
    }

    #[tokio::test]
    async fn test_each_lookup_emits_one_cost_record() {
        let catalog = provisioned().await;
        catalog.insert_item(&Item::new("a", "c1", 10, 1)).await.unwrap();

        catalog.lookup_by_primary_key("a").await.unwrap();
        catalog.lookup_by_composite_key("a", "c1").await.unwrap();
        catalog.lookup_by_index_value(10).await.unwrap();
        catalog.lookup_by_index_value_and_status(1, 10).await.unwrap();

        let strategies: Vec<_> = catalog
            .query_costs()
            .await
            .iter()
            .map(|cost| cost.strategy)
            .collect();

        assert_eq!(
            strategies,
            vec![
                LookupStrategy::PrimaryKey,
                LookupStrategy::CompositeKey,
                LookupStrategy::IndexValue,
                LookupStrategy::IndexValueFiltered,
            ]
        );
    }

    #[tokio::test]
    async fn test_usable_through_a_trait_object() {
        let catalog: Box<dyn CatalogRepository> = Box::new(provisioned().await);

        catalog.insert_item(&Item::new("a", "c1", 10, 1)).await.unwrap();
        let found = catalog.lookup_by_primary_key("a").await.unwrap();

        assert_eq!(found, Some(Item::new("a", "c1", 10, 1)));
    }
}
