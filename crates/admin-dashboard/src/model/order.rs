use crate::model::product::record_id;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An order record as served by `GET /order`.
///
/// Like [`Product`](crate::model::Product) the shape is owned by the backend; the record
/// is stored and displayed as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderData(pub Map<String, Value>);

impl OrderData {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn id(&self) -> Option<String> {
        record_id(&self.0)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}

impl From<Map<String, Value>> for OrderData {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
