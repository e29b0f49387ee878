//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! the catalog item type. Testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use catalogstore_core::product::Item;
use catalogstore_core::storage::StoreError;

// Physical attribute names. "Amount" and "ProductStatus" instead of the
// logical "value"/"status": VALUE and STATUS are DynamoDB reserved words.
pub const ATTR_ID: &str = "Id";
pub const ATTR_CATEGORY: &str = "Category";
pub const ATTR_VALUE: &str = "Amount";
pub const ATTR_STATUS: &str = "ProductStatus";

/// Convert an Item to a DynamoDB item. All four attributes are always
/// written.
pub fn item_to_attributes(item: &Item) -> HashMap<String, AttributeValue> {
    let mut attributes = HashMap::new();

    attributes.insert(ATTR_ID.to_string(), AttributeValue::S(item.id.clone()));
    attributes.insert(
        ATTR_CATEGORY.to_string(),
        AttributeValue::S(item.category.clone()),
    );
    attributes.insert(
        ATTR_VALUE.to_string(),
        AttributeValue::N(item.value.to_string()),
    );
    attributes.insert(
        ATTR_STATUS.to_string(),
        AttributeValue::N(item.status.to_string()),
    );

    attributes
}

/// Convert a DynamoDB item back into an Item.
pub fn attributes_to_item(
    attributes: &HashMap<String, AttributeValue>,
) -> Result<Item, StoreError> {
    Ok(Item {
        id: get_string(attributes, ATTR_ID)?,
        category: get_string(attributes, ATTR_CATEGORY)?,
        value: get_number(attributes, ATTR_VALUE)?,
        status: get_number(attributes, ATTR_STATUS)?,
    })
}

/// Get a required string attribute.
fn get_string(
    attributes: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, StoreError> {
    attributes
        .get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| StoreError::Validation(format!("missing or invalid attribute: {}", key)))
}

/// Get a required numeric attribute. The wire encoding is a decimal
/// string; only integral values round-trip through this layer.
fn get_number(attributes: &HashMap<String, AttributeValue>, key: &str) -> Result<i64, StoreError> {
    let raw = attributes
        .get(key)
        .and_then(|v| v.as_n().ok())
        .ok_or_else(|| StoreError::Validation(format!("missing or invalid attribute: {}", key)))?;

    raw.parse()
        .map_err(|_| StoreError::Validation(format!("attribute {} is not an integer: {}", key, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> Item {
        Item::new("a", "c1", 10, 1)
    }

    #[test]
    fn test_item_round_trip() {
        let item = sample_item();
        let attributes = item_to_attributes(&item);
        let parsed = attributes_to_item(&attributes).unwrap();

        assert_eq!(item, parsed);
    }

    #[test]
    fn test_item_has_expected_attribute_names() {
        let attributes = item_to_attributes(&sample_item());

        assert_eq!(attributes.get("Id").unwrap().as_s().unwrap(), "a");
        assert_eq!(attributes.get("Category").unwrap().as_s().unwrap(), "c1");
        assert_eq!(attributes.get("Amount").unwrap().as_n().unwrap(), "10");
        assert_eq!(
            attributes.get("ProductStatus").unwrap().as_n().unwrap(),
            "1"
        );
    }

    #[test]
    fn test_negative_numbers_round_trip() {
        let item = Item::new("a", "c1", -3, -1);
        let parsed = attributes_to_item(&item_to_attributes(&item)).unwrap();

        assert_eq!(parsed.value, -3);
        assert_eq!(parsed.status, -1);
    }

    #[test]
    fn test_missing_attribute_is_a_validation_error() {
        let mut attributes = item_to_attributes(&sample_item());
        attributes.remove(ATTR_VALUE);

        let result = attributes_to_item(&attributes);
        assert_eq!(
            result,
            Err(StoreError::Validation(
                "missing or invalid attribute: Amount".to_string()
            ))
        );
    }

    #[test]
    fn test_wrong_attribute_type_is_a_validation_error() {
        let mut attributes = item_to_attributes(&sample_item());
        attributes.insert(ATTR_VALUE.to_string(), AttributeValue::S("10".to_string()));

        let result = attributes_to_item(&attributes);
        assert!(matches!(result, Err(StoreError::Validation(_))));
    }

    #[test]
    fn test_fractional_number_is_a_validation_error() {
        let mut attributes = item_to_attributes(&sample_item());
        attributes.insert(ATTR_VALUE.to_string(), AttributeValue::N("10.5".to_string()));

        let result = attributes_to_item(&attributes);
        assert_eq!(
            result,
            Err(StoreError::Validation(
                "attribute Amount is not an integer: 10.5".to_string()
            ))
        );
    }
}
