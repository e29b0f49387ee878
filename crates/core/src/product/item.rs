use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when validating a transport payload into an [`Item`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("payload must be a flat JSON object")]
    NotAnObject,
    #[error("missing attribute: {0}")]
    MissingAttribute(&'static str),
    #[error("attribute {0} must be a string")]
    ExpectedString(&'static str),
    #[error("attribute {0} must be an integer")]
    ExpectedInteger(&'static str),
}

/// A product catalog item.
///
/// `(id, category)` is the unique primary key; writing the same pair twice
/// replaces the earlier item. `value` is reachable through the secondary
/// index, `status` is only filterable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub category: String,
    /// Indexed numeric attribute. Integral only: the store encodes numbers
    /// as decimal strings and this layer guarantees no fractional precision.
    pub value: i64,
    /// Filterable numeric attribute, not indexed.
    pub status: i64,
}

impl Item {
    /// Creates a new item.
    pub fn new(id: impl Into<String>, category: impl Into<String>, value: i64, status: i64) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            value,
            status,
        }
    }

    /// Validates a loose transport payload into a typed item.
    ///
    /// The payload must be a flat JSON object with `id` and `category` as
    /// strings and `value` and `status` as integers. Numeric attributes also
    /// accept decimal strings, matching the store's numeric wire encoding.
    pub fn from_payload(payload: &Value) -> Result<Self, ItemError> {
        let object = payload.as_object().ok_or(ItemError::NotAnObject)?;

        let string_attr = |name: &'static str| -> Result<String, ItemError> {
            let value = object.get(name).ok_or(ItemError::MissingAttribute(name))?;
            value
                .as_str()
                .map(|s| s.to_string())
                .ok_or(ItemError::ExpectedString(name))
        };

        let integer_attr = |name: &'static str| -> Result<i64, ItemError> {
            let value = object.get(name).ok_or(ItemError::MissingAttribute(name))?;
            match value {
                Value::Number(n) => n.as_i64().ok_or(ItemError::ExpectedInteger(name)),
                Value::String(s) => s.parse().map_err(|_| ItemError::ExpectedInteger(name)),
                _ => Err(ItemError::ExpectedInteger(name)),
            }
        };

        Ok(Self {
            id: string_attr("id")?,
            category: string_attr("category")?,
            value: integer_attr("value")?,
            status: integer_attr("status")?,
        })
    }
}
