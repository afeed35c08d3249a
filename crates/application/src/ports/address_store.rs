use crate::services::Statement;
use async_trait::async_trait;
use ipdb_domain::{AddressRecord, DomainError, Source};

/// Contract the query layer needs from the datastore.
///
/// Implementations run one statement per call and release whatever
/// connection or cursor they acquired before returning, on success or error.
#[async_trait]
pub trait AddressStore: Send + Sync {
    /// Runs a statement built for an address relation and returns all rows.
    async fn fetch_addresses(&self, statement: &Statement)
        -> Result<Vec<AddressRecord>, DomainError>;

    async fn fetch_sources(&self, statement: &Statement) -> Result<Vec<Source>, DomainError>;

    /// Runs a count statement and returns the single integer it yields.
    async fn fetch_count(&self, statement: &Statement) -> Result<i64, DomainError>;
}
