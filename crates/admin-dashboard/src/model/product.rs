use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A product record as served by the admin product endpoints.
///
/// The dashboard does not constrain the product schema: whatever object the backend
/// sends is kept verbatim and sent back verbatim by `add_product`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Product(pub Map<String, Value>);

impl Product {
    /// Wraps an existing JSON object.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// The record's `id` field, when it is a string or a number.
    pub fn id(&self) -> Option<String> {
        record_id(&self.0)
    }

    /// Looks up a raw field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}

impl From<Map<String, Value>> for Product {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Reads an `id` (or Mongo-style `_id`) field as a string.
pub(crate) fn record_id(fields: &Map<String, Value>) -> Option<String> {
    match fields.get("id").or_else(|| fields.get("_id"))? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_is_transparent_and_keeps_unknown_fields() {
        let raw = json!({"_id": "p1", "productName": "Lamp", "productPrice": 40});
        let product: Product = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(product.id().as_deref(), Some("p1"));
        assert_eq!(product.get("productPrice"), Some(&json!(40)));
        assert_eq!(serde_json::to_value(&product).unwrap(), raw);
    }

    #[test]
    fn test_numeric_id_is_stringified() {
        let product: Product = serde_json::from_value(json!({"id": 42})).unwrap();
        assert_eq!(product.id().as_deref(), Some("42"));
    }
}
