#![allow(dead_code)]

use async_trait::async_trait;
use ipdb_application::ports::{AddressStore, QueryEvent, QueryObserver};
use ipdb_application::services::{SqlParam, Statement, StatementTarget};
use ipdb_domain::{AddressCodec, AddressRecord, DomainError, IpVersion, ListKind, Source};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory store that records every statement it is asked to run.
///
/// Address statements return the seeded records of the statement's version,
/// honouring a trailing `LIMIT ? OFFSET ?` the way SQL would.
pub struct MockAddressStore {
    records: Mutex<HashMap<IpVersion, Vec<AddressRecord>>>,
    sources: Mutex<Vec<Source>>,
    list_counts: Mutex<HashMap<ListKind, i64>>,
    presence_count: Mutex<i64>,
    failure: Mutex<Option<DomainError>>,
    executed: Mutex<Vec<Statement>>,
}

impl MockAddressStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            sources: Mutex::new(Vec::new()),
            list_counts: Mutex::new(HashMap::new()),
            presence_count: Mutex::new(0),
            failure: Mutex::new(None),
            executed: Mutex::new(Vec::new()),
        }
    }

    pub fn with_addresses(addresses: &[&str]) -> Self {
        let store = Self::new();
        for (i, text) in addresses.iter().enumerate() {
            store.add_address(i as i64 + 1, text);
        }
        store
    }

    pub fn add_address(&self, id: i64, text: &str) {
        let value = AddressCodec::decode(text).unwrap();
        let record = AddressRecord::new(id, value, Some("2024-01-15 00:00:00".to_string()));
        self.records
            .lock()
            .unwrap()
            .entry(value.version())
            .or_default()
            .push(record);
    }

    pub fn add_source(&self, id: i64, name: &str, modified: &str) {
        self.sources.lock().unwrap().push(Source::new(
            id,
            Arc::from(name),
            Some(modified.to_string()),
        ));
    }

    pub fn set_list_count(&self, list: ListKind, count: i64) {
        self.list_counts.lock().unwrap().insert(list, count);
    }

    pub fn set_presence_count(&self, count: i64) {
        *self.presence_count.lock().unwrap() = count;
    }

    pub fn fail_with(&self, error: DomainError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    pub fn executed(&self) -> Vec<Statement> {
        self.executed.lock().unwrap().clone()
    }

    fn record(&self, statement: &Statement) -> Result<(), DomainError> {
        self.executed.lock().unwrap().push(statement.clone());
        match self.failure.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn page<T: Clone>(statement: &Statement, rows: &[T]) -> Vec<T> {
        if !statement.sql.ends_with("LIMIT ? OFFSET ?") {
            return rows.to_vec();
        }
        let n = statement.params.len();
        match (&statement.params[n - 2], &statement.params[n - 1]) {
            (SqlParam::Integer(count), SqlParam::Integer(offset)) => rows
                .iter()
                .skip(*offset as usize)
                .take(*count as usize)
                .cloned()
                .collect(),
            other => panic!("unexpected pagination params {other:?}"),
        }
    }
}

impl Default for MockAddressStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AddressStore for MockAddressStore {
    async fn fetch_addresses(
        &self,
        statement: &Statement,
    ) -> Result<Vec<AddressRecord>, DomainError> {
        self.record(statement)?;
        let StatementTarget::Addresses(version) = statement.target else {
            panic!("address fetch with {:?}", statement.target);
        };
        let records = self.records.lock().unwrap();
        let block = records.get(&version).cloned().unwrap_or_default();
        Ok(Self::page(statement, &block))
    }

    async fn fetch_sources(&self, statement: &Statement) -> Result<Vec<Source>, DomainError> {
        self.record(statement)?;
        let sources = self.sources.lock().unwrap().clone();
        Ok(Self::page(statement, &sources))
    }

    async fn fetch_count(&self, statement: &Statement) -> Result<i64, DomainError> {
        self.record(statement)?;
        match statement.target {
            StatementTarget::ListCount(_, list) => Ok(self
                .list_counts
                .lock()
                .unwrap()
                .get(&list)
                .copied()
                .unwrap_or(0)),
            StatementTarget::Count(_) => Ok(*self.presence_count.lock().unwrap()),
            other => panic!("count fetch with {other:?}"),
        }
    }
}

#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<QueryEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<QueryEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl QueryObserver for RecordingObserver {
    fn report(&self, event: &QueryEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}
