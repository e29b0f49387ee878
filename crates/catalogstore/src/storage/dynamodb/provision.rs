//! Table schema definition for the product catalog.
//!
//! One table, one secondary index: `(Id, Category)` is the primary key and
//! `AmountIndex` makes the numeric value queryable on its own partition.

use aws_sdk_dynamodb::types::{
    AttributeDefinition, GlobalSecondaryIndex, KeySchemaElement, KeyType, Projection,
    ProjectionType, ScalarAttributeType,
};
use catalogstore_core::storage::StoreError;

use super::conversions::{ATTR_CATEGORY, ATTR_ID, ATTR_VALUE};

/// Name of the global secondary index keyed on the item value.
pub const VALUE_INDEX: &str = "AmountIndex";

/// Primary key schema: Id HASH, Category RANGE.
pub(super) fn key_schema() -> Result<Vec<KeySchemaElement>, StoreError> {
    Ok(vec![
        KeySchemaElement::builder()
            .attribute_name(ATTR_ID)
            .key_type(KeyType::Hash)
            .build()
            .map_err(build_error)?,
        KeySchemaElement::builder()
            .attribute_name(ATTR_CATEGORY)
            .key_type(KeyType::Range)
            .build()
            .map_err(build_error)?,
    ])
}

/// Definitions for every key attribute, table and index.
pub(super) fn attribute_definitions() -> Result<Vec<AttributeDefinition>, StoreError> {
    Ok(vec![
        AttributeDefinition::builder()
            .attribute_name(ATTR_ID)
            .attribute_type(ScalarAttributeType::S)
            .build()
            .map_err(build_error)?,
        AttributeDefinition::builder()
            .attribute_name(ATTR_CATEGORY)
            .attribute_type(ScalarAttributeType::S)
            .build()
            .map_err(build_error)?,
        AttributeDefinition::builder()
            .attribute_name(ATTR_VALUE)
            .attribute_type(ScalarAttributeType::N)
            .build()
            .map_err(build_error)?,
    ])
}

/// The value index: Amount as its HASH key, projecting all attributes so
/// index queries never have to touch the base table.
pub(super) fn value_index() -> Result<GlobalSecondaryIndex, StoreError> {
    GlobalSecondaryIndex::builder()
        .index_name(VALUE_INDEX)
        .key_schema(
            KeySchemaElement::builder()
                .attribute_name(ATTR_VALUE)
                .key_type(KeyType::Hash)
                .build()
                .map_err(build_error)?,
        )
        .projection(
            Projection::builder()
                .projection_type(ProjectionType::All)
                .build(),
        )
        .build()
        .map_err(build_error)
}

fn build_error(err: impl std::fmt::Display) -> StoreError {
    StoreError::Unavailable(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_schema_is_id_hash_category_range() {
        let schema = key_schema().unwrap();

        assert_eq!(schema.len(), 2);
        assert_eq!(schema[0].attribute_name(), "Id");
        assert_eq!(schema[0].key_type(), &KeyType::Hash);
        assert_eq!(schema[1].attribute_name(), "Category");
        assert_eq!(schema[1].key_type(), &KeyType::Range);
    }

    #[test]
    fn test_attribute_definitions_cover_all_key_attributes() {
        let definitions = attribute_definitions().unwrap();
        let names: Vec<_> = definitions.iter().map(|d| d.attribute_name()).collect();

        assert_eq!(names, vec!["Id", "Category", "Amount"]);
        assert_eq!(definitions[2].attribute_type(), &ScalarAttributeType::N);
    }

    #[test]
    fn test_value_index_projects_all_attributes() {
        let index = value_index().unwrap();

        assert_eq!(index.index_name(), "AmountIndex");
        assert_eq!(index.key_schema()[0].attribute_name(), "Amount");
        assert_eq!(index.key_schema()[0].key_type(), &KeyType::Hash);
        assert_eq!(
            index.projection().unwrap().projection_type(),
            Some(&ProjectionType::All)
        );
    }
}
