use crate::ports::{AddressStore, QueryEvent, QueryObserver};
use crate::services::{QueryBuilder, QueryExecutor, QueryIntent};
use chrono::NaiveDate;
use ipdb_domain::{
    AddressCodec, AddressRecord, DateWindow, DomainError, ListKind, PageSpec, Source,
};
use std::sync::Arc;
use tracing::instrument;

/// Read-only facade over the address store.
///
/// Every operation decodes and validates its inputs before any statement
/// runs, issues its statements sequentially and returns errors unchanged.
pub struct AddressRepository {
    executor: QueryExecutor,
    observer: Arc<dyn QueryObserver>,
}

impl AddressRepository {
    pub fn new(store: Arc<dyn AddressStore>, observer: Arc<dyn QueryObserver>) -> Self {
        Self {
            executor: QueryExecutor::new(store),
            observer,
        }
    }

    #[instrument(skip(self))]
    pub async fn addresses_by_source(
        &self,
        source_name: &str,
        page: Option<PageSpec>,
    ) -> Result<Vec<AddressRecord>, DomainError> {
        let statements = QueryBuilder::build(&QueryIntent::BySource(source_name.to_string()), page)?;
        let records = self.executor.fetch_addresses(&statements).await?;

        self.observer.report(&QueryEvent::AddressesBySource {
            source_name: source_name.to_string(),
            page,
            found: records.len(),
        });
        Ok(records)
    }

    #[instrument(skip(self))]
    pub async fn addresses_in_range(
        &self,
        start: &str,
        end: &str,
        page: Option<PageSpec>,
    ) -> Result<Vec<AddressRecord>, DomainError> {
        let intent = QueryIntent::ByRange {
            start: AddressCodec::decode(start)?,
            end: AddressCodec::decode(end)?,
        };
        let statements = QueryBuilder::build(&intent, page)?;
        let records = self.executor.fetch_addresses(&statements).await?;

        self.observer.report(&QueryEvent::AddressesInRange {
            start: start.to_string(),
            end: end.to_string(),
            page,
            found: records.len(),
        });
        Ok(records)
    }

    #[instrument(skip(self))]
    pub async fn classify(&self, address: &str) -> Result<Option<ListKind>, DomainError> {
        let value = AddressCodec::decode(address)?;
        let statements = QueryBuilder::build(&QueryIntent::Classification(value), None)?;
        let list = self.executor.classify(&statements).await?;

        self.observer.report(&QueryEvent::Classified {
            address: address.to_string(),
            list,
        });
        Ok(list)
    }

    #[instrument(skip(self))]
    pub async fn addresses_added_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        page: Option<PageSpec>,
    ) -> Result<Vec<AddressRecord>, DomainError> {
        let window = DateWindow::new(start, end)?;
        let statements = QueryBuilder::build(&QueryIntent::AddedBetween(window), page)?;
        let records = self.executor.fetch_addresses(&statements).await?;

        self.observer.report(&QueryEvent::AddressesAddedBetween {
            window,
            page,
            found: records.len(),
        });
        Ok(records)
    }

    #[instrument(skip(self))]
    pub async fn sources_modified_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        page: Option<PageSpec>,
    ) -> Result<Vec<Source>, DomainError> {
        let window = DateWindow::new(start, end)?;
        let statements = QueryBuilder::build(&QueryIntent::SourcesModifiedBetween(window), page)?;
        let sources = self.executor.fetch_sources(&statements).await?;

        self.observer.report(&QueryEvent::SourcesModifiedBetween {
            window,
            page,
            found: sources.len(),
        });
        Ok(sources)
    }

    #[instrument(skip(self))]
    pub async fn contains(&self, address: &str) -> Result<bool, DomainError> {
        let value = AddressCodec::decode(address)?;
        let found = self.executor.exists(&QueryBuilder::exists(value)).await?;

        self.observer.report(&QueryEvent::Contains {
            address: address.to_string(),
            found,
        });
        Ok(found)
    }
}
