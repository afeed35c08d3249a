//! Dual-stack address model.
//!
//! IPv4 and IPv6 addresses live in disjoint numeric domains and in separate
//! relations. [`IpVersion`] carries everything that differs per domain, so
//! callers never format relation names themselves.

use crate::errors::DomainError;
use crate::list_kind::ListKind;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IpVersion {
    V4,
    V6,
}

impl IpVersion {
    pub const ALL: [IpVersion; 2] = [IpVersion::V4, IpVersion::V6];

    pub fn number(self) -> u8 {
        match self {
            IpVersion::V4 => 4,
            IpVersion::V6 => 6,
        }
    }

    pub fn address_relation(self) -> &'static str {
        match self {
            IpVersion::V4 => "ipv4_addresses",
            IpVersion::V6 => "ipv6_addresses",
        }
    }

    /// Foreign key column in `source_to_addresses`.
    pub fn source_link_column(self) -> &'static str {
        match self {
            IpVersion::V4 => "v4_id",
            IpVersion::V6 => "v6_id",
        }
    }

    pub fn list_column(self, list: ListKind) -> &'static str {
        match (self, list) {
            (IpVersion::V4, ListKind::Whitelist) => "v4_id_whitelist",
            (IpVersion::V4, ListKind::Blacklist) => "v4_id_blacklist",
            (IpVersion::V6, ListKind::Whitelist) => "v6_id_whitelist",
            (IpVersion::V6, ListKind::Blacklist) => "v6_id_blacklist",
        }
    }
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Column representation of an address.
///
/// IPv6 values are stored as 16 big-endian bytes so that BLOB comparison
/// orders them numerically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageValue {
    Integer(i64),
    Bytes(Vec<u8>),
}

/// Canonical numeric value of an address, tagged with its domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressValue {
    V4(u32),
    V6(u128),
}

impl AddressValue {
    pub fn version(&self) -> IpVersion {
        match self {
            AddressValue::V4(_) => IpVersion::V4,
            AddressValue::V6(_) => IpVersion::V6,
        }
    }

    pub fn numeric(&self) -> u128 {
        match *self {
            AddressValue::V4(v) => u128::from(v),
            AddressValue::V6(v) => v,
        }
    }

    /// Orders two values of the same version. Values from different
    /// domains have no ordering.
    pub fn compare(&self, other: &AddressValue) -> Option<Ordering> {
        match (self, other) {
            (AddressValue::V4(a), AddressValue::V4(b)) => Some(a.cmp(b)),
            (AddressValue::V6(a), AddressValue::V6(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    pub fn encode(&self) -> StorageValue {
        match *self {
            AddressValue::V4(v) => StorageValue::Integer(i64::from(v)),
            AddressValue::V6(v) => StorageValue::Bytes(v.to_be_bytes().to_vec()),
        }
    }

    pub fn from_storage(version: IpVersion, stored: StorageValue) -> Result<Self, DomainError> {
        match (version, stored) {
            (IpVersion::V4, StorageValue::Integer(n)) => u32::try_from(n)
                .map(AddressValue::V4)
                .map_err(|_| DomainError::InvalidAddress(format!("{n} is outside the IPv4 range"))),
            (IpVersion::V6, StorageValue::Bytes(bytes)) => {
                let raw: [u8; 16] = bytes.as_slice().try_into().map_err(|_| {
                    DomainError::InvalidAddress(format!(
                        "stored IPv6 value has {} bytes, expected 16",
                        bytes.len()
                    ))
                })?;
                Ok(AddressValue::V6(u128::from_be_bytes(raw)))
            }
            (version, stored) => Err(DomainError::InvalidAddress(format!(
                "stored value {stored:?} does not belong to the IPv{version} domain"
            ))),
        }
    }

    pub fn to_ip(&self) -> IpAddr {
        match *self {
            AddressValue::V4(v) => IpAddr::V4(Ipv4Addr::from(v)),
            AddressValue::V6(v) => IpAddr::V6(Ipv6Addr::from(v)),
        }
    }
}

impl From<IpAddr> for AddressValue {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(v4) => AddressValue::V4(u32::from(v4)),
            IpAddr::V6(v6) => AddressValue::V6(u128::from(v6)),
        }
    }
}

impl fmt::Display for AddressValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_ip())
    }
}

pub struct AddressCodec;

impl AddressCodec {
    pub fn decode(text: &str) -> Result<AddressValue, DomainError> {
        text.trim()
            .parse::<IpAddr>()
            .map(AddressValue::from)
            .map_err(|_| DomainError::InvalidAddress(text.to_string()))
    }
}
