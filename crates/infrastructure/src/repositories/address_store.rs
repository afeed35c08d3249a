use super::address_row_mapper::{row_to_address, row_to_source};
use async_trait::async_trait;
use ipdb_application::ports::AddressStore;
use ipdb_application::services::{SqlParam, Statement};
use ipdb_domain::{AddressRecord, DomainError, IpVersion, Source};
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments};
use sqlx::{Row, SqlitePool};
use tracing::{error, instrument};

type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// [`AddressStore`] over a caller-owned SQLite pool.
///
/// Each statement checks out a pooled connection for the duration of one
/// fetch. The connection goes back to the pool when the fetch future
/// completes, whether it succeeded or failed.
#[derive(Clone)]
pub struct SqliteAddressStore {
    pool: SqlitePool,
}

impl SqliteAddressStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn prepare(statement: &Statement) -> SqliteQuery<'_> {
        statement
            .params
            .iter()
            .fold(sqlx::query(&statement.sql), |query, param| match param {
                SqlParam::Integer(n) => query.bind(*n),
                SqlParam::Blob(bytes) => query.bind(bytes.as_slice()),
                SqlParam::Text(text) => query.bind(text.as_str()),
            })
    }
}

#[async_trait]
impl AddressStore for SqliteAddressStore {
    #[instrument(skip(self, statement), fields(target = ?statement.target))]
    async fn fetch_addresses(
        &self,
        statement: &Statement,
    ) -> Result<Vec<AddressRecord>, DomainError> {
        let version: IpVersion = statement.version().ok_or_else(|| {
            DomainError::DatabaseError(format!(
                "{:?} statement does not read an address relation",
                statement.target
            ))
        })?;

        let rows = Self::prepare(statement)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to fetch address rows");
                DomainError::DatabaseError(e.to_string())
            })?;

        rows.iter().map(|row| row_to_address(row, version)).collect()
    }

    #[instrument(skip(self, statement))]
    async fn fetch_sources(&self, statement: &Statement) -> Result<Vec<Source>, DomainError> {
        let rows = Self::prepare(statement)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to fetch source rows");
                DomainError::DatabaseError(e.to_string())
            })?;

        rows.iter().map(row_to_source).collect()
    }

    #[instrument(skip(self, statement), fields(target = ?statement.target))]
    async fn fetch_count(&self, statement: &Statement) -> Result<i64, DomainError> {
        let row = Self::prepare(statement)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to fetch count");
                DomainError::DatabaseError(e.to_string())
            })?;

        row.try_get::<i64, _>(0)
            .map_err(|e| DomainError::DatabaseError(e.to_string()))
    }
}
