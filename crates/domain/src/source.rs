use crate::address_record::RowAttributes;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A named upstream contributor of address records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub id: i64,
    pub name: Arc<str>,
    pub url_date_modified: Option<String>,
    #[serde(flatten)]
    pub attributes: RowAttributes,
}

impl Source {
    pub fn new(id: i64, name: Arc<str>, url_date_modified: Option<String>) -> Self {
        Self {
            id,
            name,
            url_date_modified,
            attributes: RowAttributes::new(),
        }
    }

    pub fn with_attributes(mut self, attributes: RowAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn attribute(&self, column: &str) -> Option<&serde_json::Value> {
        self.attributes.get(column)
    }
}
