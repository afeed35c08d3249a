use super::query_builder::{Statement, StatementTarget};
use crate::ports::AddressStore;
use ipdb_domain::{AddressRecord, DomainError, ListKind, Source};
use std::sync::Arc;

/// Runs built statements one at a time against the store and folds their
/// results.
#[derive(Clone)]
pub struct QueryExecutor {
    store: Arc<dyn AddressStore>,
}

impl QueryExecutor {
    pub fn new(store: Arc<dyn AddressStore>) -> Self {
        Self { store }
    }

    /// Concatenates per-version blocks in statement order. Rows are never
    /// re-sorted across blocks.
    pub async fn fetch_addresses(
        &self,
        statements: &[Statement],
    ) -> Result<Vec<AddressRecord>, DomainError> {
        let mut records = Vec::new();
        for statement in statements {
            let mut block = self.store.fetch_addresses(statement).await?;
            records.append(&mut block);
        }
        Ok(records)
    }

    pub async fn fetch_sources(&self, statements: &[Statement]) -> Result<Vec<Source>, DomainError> {
        let mut sources = Vec::new();
        for statement in statements {
            let mut block = self.store.fetch_sources(statement).await?;
            sources.append(&mut block);
        }
        Ok(sources)
    }

    pub async fn exists(&self, statement: &Statement) -> Result<bool, DomainError> {
        Ok(self.store.fetch_count(statement).await? > 0)
    }

    /// Expects the whitelist and blacklist count statements, in any order.
    pub async fn classify(&self, statements: &[Statement]) -> Result<Option<ListKind>, DomainError> {
        let mut whitelist = 0;
        let mut blacklist = 0;
        for statement in statements {
            let count = self.store.fetch_count(statement).await?;
            match statement.target {
                StatementTarget::ListCount(_, ListKind::Whitelist) => whitelist = count,
                StatementTarget::ListCount(_, ListKind::Blacklist) => blacklist = count,
                other => {
                    return Err(DomainError::DatabaseError(format!(
                        "{other:?} statement passed to classification"
                    )))
                }
            }
        }
        resolve_classification(whitelist, blacklist)
    }
}

/// Equal nonzero counts mean the address sits in both lists, which upstream
/// data must never produce. Otherwise any whitelist row wins, whatever the
/// blacklist count.
pub fn resolve_classification(
    whitelist_count: i64,
    blacklist_count: i64,
) -> Result<Option<ListKind>, DomainError> {
    if whitelist_count == blacklist_count {
        if whitelist_count > 0 {
            return Err(DomainError::IntegrityViolation(format!(
                "address present in both lists (whitelist={whitelist_count}, blacklist={blacklist_count})"
            )));
        }
        return Ok(None);
    }

    if whitelist_count > 0 {
        Ok(Some(ListKind::Whitelist))
    } else {
        Ok(Some(ListKind::Blacklist))
    }
}
