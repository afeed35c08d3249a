pub mod query_builder;
pub mod query_executor;

pub use query_builder::{QueryBuilder, QueryIntent, SqlParam, Statement, StatementTarget};
pub use query_executor::{resolve_classification, QueryExecutor};
