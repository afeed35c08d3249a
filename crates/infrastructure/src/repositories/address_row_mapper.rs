use ipdb_domain::{
    AddressRecord, AddressValue, DomainError, IpVersion, RowAttributes, Source, StorageValue,
};
use serde_json::Value;
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row, TypeInfo, ValueRef};
use std::sync::Arc;

const ADDRESS_COLUMNS: &[&str] = &["id", "address", "date_added"];
const SOURCE_COLUMNS: &[&str] = &["id", "source_name", "url_date_modified"];

fn column_error(column: &str, e: sqlx::Error) -> DomainError {
    DomainError::DatabaseError(format!("Failed to read column {column}: {e}"))
}

/// Decodes one column by the storage class of its value, not its declared type.
fn column_value(row: &SqliteRow, index: usize, name: &str) -> Result<Value, DomainError> {
    let raw = row.try_get_raw(index).map_err(|e| column_error(name, e))?;
    if raw.is_null() {
        return Ok(Value::Null);
    }
    let storage_class = raw.type_info().name().to_string();

    let value = match storage_class.as_str() {
        "INTEGER" | "BOOLEAN" => Value::from(
            row.try_get::<i64, _>(index)
                .map_err(|e| column_error(name, e))?,
        ),
        "REAL" | "NUMERIC" => Value::from(
            row.try_get::<f64, _>(index)
                .map_err(|e| column_error(name, e))?,
        ),
        "BLOB" => Value::from(
            row.try_get::<Vec<u8>, _>(index)
                .map_err(|e| column_error(name, e))?,
        ),
        _ => Value::from(
            row.try_get::<String, _>(index)
                .map_err(|e| column_error(name, e))?,
        ),
    };
    Ok(value)
}

fn extra_columns(row: &SqliteRow, known: &[&str]) -> Result<RowAttributes, DomainError> {
    let mut attributes = RowAttributes::new();
    for column in row.columns() {
        let name = column.name();
        if known.contains(&name) {
            continue;
        }
        attributes.insert(name.to_string(), column_value(row, column.ordinal(), name)?);
    }
    Ok(attributes)
}

pub(crate) fn row_to_address(
    row: &SqliteRow,
    version: IpVersion,
) -> Result<AddressRecord, DomainError> {
    let id: i64 = row.try_get("id").map_err(|e| column_error("id", e))?;

    let stored = match version {
        IpVersion::V4 => StorageValue::Integer(
            row.try_get::<i64, _>("address")
                .map_err(|e| column_error("address", e))?,
        ),
        IpVersion::V6 => StorageValue::Bytes(
            row.try_get::<Vec<u8>, _>("address")
                .map_err(|e| column_error("address", e))?,
        ),
    };
    let value = AddressValue::from_storage(version, stored)?;

    let date_added: Option<String> = row
        .try_get("date_added")
        .map_err(|e| column_error("date_added", e))?;

    Ok(AddressRecord::new(id, value, date_added)
        .with_attributes(extra_columns(row, ADDRESS_COLUMNS)?))
}

pub(crate) fn row_to_source(row: &SqliteRow) -> Result<Source, DomainError> {
    let id: i64 = row.try_get("id").map_err(|e| column_error("id", e))?;
    let name: String = row
        .try_get("source_name")
        .map_err(|e| column_error("source_name", e))?;
    let url_date_modified: Option<String> = row
        .try_get("url_date_modified")
        .map_err(|e| column_error("url_date_modified", e))?;

    Ok(
        Source::new(id, Arc::from(name.as_str()), url_date_modified)
            .with_attributes(extra_columns(row, SOURCE_COLUMNS)?),
    )
}
