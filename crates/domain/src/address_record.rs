use crate::address::{AddressValue, IpVersion};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::net::IpAddr;

/// Persisted columns that [`AddressRecord`] does not model, keyed by column name.
pub type RowAttributes = BTreeMap<String, serde_json::Value>;

/// A row of `ipv4_addresses` or `ipv6_addresses`.
///
/// Only `address` is decoded into a typed value. Any column beyond `id`,
/// `address` and `date_added` is kept as-is in `attributes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub id: i64,
    pub address: IpAddr,
    pub date_added: Option<String>,
    #[serde(flatten)]
    pub attributes: RowAttributes,
}

impl AddressRecord {
    pub fn new(id: i64, value: AddressValue, date_added: Option<String>) -> Self {
        Self {
            id,
            address: value.to_ip(),
            date_added,
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

    pub fn value(&self) -> AddressValue {
        AddressValue::from(self.address)
    }

    pub fn version(&self) -> IpVersion {
        self.value().version()
    }
}
