//! DynamoDB catalog implementation.
//!
//! Implements the repository trait from `catalogstore_core::storage` by
//! translating query plans into DynamoDB requests.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, BillingMode};
use aws_sdk_dynamodb::Client;

use catalogstore_core::product::Item;
use catalogstore_core::storage::{CatalogRepository, KeyCondition, QueryCost, QueryPlan, Result};

use super::client::{create_client, StoreConfig};
use super::conversions::{
    attributes_to_item, item_to_attributes, ATTR_CATEGORY, ATTR_ID, ATTR_STATUS, ATTR_VALUE,
};
use super::error::{map_create_table_error, map_put_item_error, map_query_error};
use super::provision;
use crate::storage::record_cost;

/// DynamoDB-backed product catalog.
///
/// Owns the process-wide store connection: construct it once at the
/// composition root and share it from there (the SDK client is cheap to
/// clone and safe for concurrent use). Every operation is one independent
/// network request; no state is cached locally, so read-after-write
/// visibility is exactly the store's own consistency level.
#[derive(Debug, Clone)]
pub struct DynamoDbCatalog {
    client: Client,
    table_name: String,
}

/// Items plus the store-reported scan cost for one query.
struct QueryOutput {
    items: Vec<Item>,
    scanned_count: i32,
}

impl DynamoDbCatalog {
    /// Creates a new catalog with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new catalog from environment configuration.
    ///
    /// Uses the AWS SDK default credential chain, honoring `AWS_REGION`,
    /// `AWS_ENDPOINT_URL` (local DynamoDB) and `DYNAMODB_TABLE_NAME`
    /// (defaults to "products").
    pub async fn from_env() -> Self {
        let config = StoreConfig::default();
        let client = create_client(&config).await;
        Self::new(client, config.table_name)
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Executes a query plan and returns the matching items in store order
    /// plus the scanned count the store reports.
    ///
    /// The scanned count is taken before the residual filter runs, so for
    /// filtered plans it can exceed the number of items returned.
    async fn query(&self, plan: &QueryPlan) -> Result<QueryOutput> {
        let mut request = self.client.query().table_name(&self.table_name);

        if plan.uses_index() {
            request = request.index_name(provision::VALUE_INDEX);
        }

        let (expression, values) = key_condition(&plan.key);
        request = request.key_condition_expression(expression);
        for (placeholder, value) in values {
            request = request.expression_attribute_values(placeholder, value);
        }

        if let Some(filter) = &plan.filter {
            request = request
                .filter_expression(format!("{} = :status", ATTR_STATUS))
                .expression_attribute_values(
                    ":status",
                    AttributeValue::N(filter.status.to_string()),
                );
        }

        let response = request.send().await.map_err(map_query_error)?;

        let items = response
            .items
            .unwrap_or_default()
            .iter()
            .map(attributes_to_item)
            .collect::<Result<Vec<_>>>()?;

        Ok(QueryOutput {
            items,
            scanned_count: response.scanned_count,
        })
    }

    /// Runs a plan, emits its cost record, and hands the items back
    /// untouched.
    async fn run(&self, plan: QueryPlan) -> Result<Vec<Item>> {
        let output = self.query(&plan).await?;

        record_cost(&QueryCost {
            strategy: plan.strategy,
            scanned_count: output.scanned_count,
        });

        Ok(output.items)
    }
}

#[async_trait]
impl CatalogRepository for DynamoDbCatalog {
    async fn create_schema(&self) -> Result<()> {
        self.client
            .create_table()
            .table_name(&self.table_name)
            .set_key_schema(Some(provision::key_schema()?))
            .set_attribute_definitions(Some(provision::attribute_definitions()?))
            .global_secondary_indexes(provision::value_index()?)
            .billing_mode(BillingMode::PayPerRequest)
            .send()
            .await
            .map_err(|e| map_create_table_error(e, &self.table_name))?;

        Ok(())
    }

    async fn insert_item(&self, item: &Item) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item_to_attributes(item)))
            .send()
            .await
            .map_err(map_put_item_error)?;

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

/// Renders a key condition into its expression string and placeholder
/// values.
fn key_condition(key: &KeyCondition) -> (String, Vec<(&'static str, AttributeValue)>) {
    match key {
        KeyCondition::IdEquals { id } => (
            format!("{} = :id", ATTR_ID),
            vec![(":id", AttributeValue::S(id.clone()))],
        ),
        KeyCondition::IdAndCategoryEqual { id, category } => (
            format!("{} = :id AND {} = :category", ATTR_ID, ATTR_CATEGORY),
            vec![
                (":id", AttributeValue::S(id.clone())),
                (":category", AttributeValue::S(category.clone())),
            ],
        ),
        KeyCondition::ValueEquals { value } => (
            format!("{} = :value", ATTR_VALUE),
            vec![(":value", AttributeValue::N(value.to_string()))],
        ),
    }
}
