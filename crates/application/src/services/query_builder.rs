use ipdb_domain::{
    AddressValue, DateWindow, DomainError, IpVersion, ListKind, PageSpec, StorageValue,
};

/// Value bound to a `?` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlParam {
    Integer(i64),
    Blob(Vec<u8>),
    Text(String),
}

impl From<StorageValue> for SqlParam {
    fn from(value: StorageValue) -> Self {
        match value {
            StorageValue::Integer(n) => SqlParam::Integer(n),
            StorageValue::Bytes(b) => SqlParam::Blob(b),
        }
    }
}

/// What a statement reads, so the executor and store know how to map rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementTarget {
    Addresses(IpVersion),
    Sources,
    Count(IpVersion),
    ListCount(IpVersion, ListKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<SqlParam>,
    pub target: StatementTarget,
}

impl Statement {
    fn new(sql: String, target: StatementTarget) -> Self {
        Self {
            sql,
            params: Vec::new(),
            target,
        }
    }

    fn bind(mut self, param: SqlParam) -> Self {
        self.params.push(param);
        self
    }

    fn paginate(mut self, page: Option<PageSpec>) -> Self {
        if let Some(page) = page {
            self.sql.push_str(" LIMIT ? OFFSET ?");
            self.params.push(SqlParam::Integer(i64::from(page.count)));
            self.params.push(SqlParam::Integer(i64::from(page.offset)));
        }
        self
    }

    pub fn version(&self) -> Option<IpVersion> {
        match self.target {
            StatementTarget::Addresses(v)
            | StatementTarget::Count(v)
            | StatementTarget::ListCount(v, _) => Some(v),
            StatementTarget::Sources => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryIntent {
    BySource(String),
    ByRange {
        start: AddressValue,
        end: AddressValue,
    },
    AddedBetween(DateWindow),
    SourcesModifiedBetween(DateWindow),
    Exists(AddressValue),
    Classification(AddressValue),
}

pub struct QueryBuilder;

impl QueryBuilder {
    /// Statements for `intent` in execution order: v4 before v6, whitelist
    /// before blacklist.
    pub fn build(intent: &QueryIntent, page: Option<PageSpec>) -> Result<Vec<Statement>, DomainError> {
        match intent {
            QueryIntent::BySource(name) => Ok(Self::by_source(name, page)),
            QueryIntent::ByRange { start, end } => Ok(vec![Self::by_range(*start, *end, page)?]),
            QueryIntent::AddedBetween(window) => Ok(Self::added_between(window, page)),
            QueryIntent::SourcesModifiedBetween(window) => {
                Ok(vec![Self::sources_modified_between(window, page)])
            }
            QueryIntent::Exists(value) => Ok(vec![Self::exists(*value)]),
            QueryIntent::Classification(value) => {
                let [whitelist, blacklist] = Self::classification(*value);
                Ok(vec![whitelist, blacklist])
            }
        }
    }

    pub fn by_source(source_name: &str, page: Option<PageSpec>) -> Vec<Statement> {
        IpVersion::ALL
            .into_iter()
            .map(|version| {
                let sql = format!(
                    "SELECT * FROM {relation}
                     WHERE id IN (
                         SELECT source_to_addresses.{link} FROM source_to_addresses
                         JOIN sources ON source_to_addresses.source_id = sources.id
                         WHERE sources.source_name = ?
                     )
                     ORDER BY id",
                    relation = version.address_relation(),
                    link = version.source_link_column(),
                );
                Statement::new(sql, StatementTarget::Addresses(version))
                    .bind(SqlParam::Text(source_name.to_string()))
                    .paginate(page)
            })
            .collect()
    }

    /// Bounds are bound as given; `start > end` yields an empty range.
    pub fn by_range(
        start: AddressValue,
        end: AddressValue,
        page: Option<PageSpec>,
    ) -> Result<Statement, DomainError> {
        if start.version() != end.version() {
            return Err(DomainError::VersionMismatch {
                start: start.version(),
                end: end.version(),
            });
        }

        let version = start.version();
        let sql = format!(
            "SELECT * FROM {} WHERE address BETWEEN ? AND ? ORDER BY id",
            version.address_relation()
        );
        Ok(Statement::new(sql, StatementTarget::Addresses(version))
            .bind(start.encode().into())
            .bind(end.encode().into())
            .paginate(page))
    }

    /// Whole days are inclusive: the window is matched as
    /// `start <= date_added < end + 1 day` on the raw column.
    pub fn added_between(window: &DateWindow, page: Option<PageSpec>) -> Vec<Statement> {
        IpVersion::ALL
            .into_iter()
            .map(|version| {
                let sql = format!(
                    "SELECT * FROM {}
                     WHERE date_added >= ? AND date_added < ?
                     ORDER BY id",
                    version.address_relation()
                );
                Statement::new(sql, StatementTarget::Addresses(version))
                    .bind(SqlParam::Text(window.start_param()))
                    .bind(SqlParam::Text(window.end_exclusive_param()))
                    .paginate(page)
            })
            .collect()
    }

    pub fn sources_modified_between(window: &DateWindow, page: Option<PageSpec>) -> Statement {
        Statement::new(
            "SELECT * FROM sources
             WHERE url_date_modified >= ? AND url_date_modified < ?
             ORDER BY id"
                .to_string(),
            StatementTarget::Sources,
        )
        .bind(SqlParam::Text(window.start_param()))
        .bind(SqlParam::Text(window.end_exclusive_param()))
        .paginate(page)
    }

    pub fn exists(value: AddressValue) -> Statement {
        let version = value.version();
        let sql = format!(
            "SELECT COUNT(id) FROM {} WHERE address = ?",
            version.address_relation()
        );
        Statement::new(sql, StatementTarget::Count(version)).bind(value.encode().into())
    }

    /// Whitelist count statement followed by the blacklist one.
    pub fn classification(value: AddressValue) -> [Statement; 2] {
        [ListKind::Whitelist, ListKind::Blacklist].map(|list| Self::list_count(value, list))
    }

    fn list_count(value: AddressValue, list: ListKind) -> Statement {
        let version = value.version();
        let sql = format!(
            "SELECT COUNT(*) FROM {list_relation}
             WHERE {column} IN (
                 SELECT id FROM {address_relation} WHERE address = ?
             )",
            list_relation = list.relation(),
            column = version.list_column(list),
            address_relation = version.address_relation(),
        );
        Statement::new(sql, StatementTarget::ListCount(version, list)).bind(value.encode().into())
    }
}
