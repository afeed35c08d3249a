#![allow(dead_code)]

use ipdb_domain::{AddressCodec, StorageValue};
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

const SCHEMA: &[&str] = &[
    "CREATE TABLE ipv4_addresses (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        address    INTEGER NOT NULL,
        date_added DATETIME DEFAULT CURRENT_TIMESTAMP
    )",
    "CREATE TABLE ipv6_addresses (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        address    BLOB    NOT NULL,
        date_added DATETIME DEFAULT CURRENT_TIMESTAMP
    )",
    "CREATE TABLE sources (
        id                INTEGER PRIMARY KEY AUTOINCREMENT,
        source_name       TEXT    NOT NULL UNIQUE,
        url_date_modified DATETIME
    )",
    "CREATE TABLE source_to_addresses (
        id        INTEGER PRIMARY KEY AUTOINCREMENT,
        source_id INTEGER NOT NULL REFERENCES sources(id),
        v4_id     INTEGER REFERENCES ipv4_addresses(id),
        v6_id     INTEGER REFERENCES ipv6_addresses(id)
    )",
    "CREATE TABLE whitelist (
        id              INTEGER PRIMARY KEY AUTOINCREMENT,
        v4_id_whitelist INTEGER REFERENCES ipv4_addresses(id),
        v6_id_whitelist INTEGER REFERENCES ipv6_addresses(id)
    )",
    "CREATE TABLE blacklist (
        id              INTEGER PRIMARY KEY AUTOINCREMENT,
        v4_id_blacklist INTEGER REFERENCES ipv4_addresses(id),
        v6_id_blacklist INTEGER REFERENCES ipv6_addresses(id)
    )",
];

pub async fn create_schema(pool: &SqlitePool) {
    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(pool)
        .await
        .unwrap();
    for ddl in SCHEMA {
        sqlx::query(ddl).execute(pool).await.unwrap();
    }
}

/// Single connection so every statement sees the same in-memory database.
pub async fn create_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    create_schema(&pool).await;
    pool
}

pub async fn insert_address(pool: &SqlitePool, text: &str, date_added: &str) -> i64 {
    let value = AddressCodec::decode(text).unwrap();
    let sql = format!(
        "INSERT INTO {} (address, date_added) VALUES (?, ?)",
        value.version().address_relation()
    );
    let query = sqlx::query(&sql);
    let query = match value.encode() {
        StorageValue::Integer(n) => query.bind(n),
        StorageValue::Bytes(bytes) => query.bind(bytes),
    };
    query
        .bind(date_added)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn insert_source(pool: &SqlitePool, name: &str, modified: &str) -> i64 {
    sqlx::query("INSERT INTO sources (source_name, url_date_modified) VALUES (?, ?)")
        .bind(name)
        .bind(modified)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn link(pool: &SqlitePool, source_id: i64, text: &str, address_id: i64) {
    let version = AddressCodec::decode(text).unwrap().version();
    let sql = format!(
        "INSERT INTO source_to_addresses (source_id, {}) VALUES (?, ?)",
        version.source_link_column()
    );
    sqlx::query(&sql)
        .bind(source_id)
        .bind(address_id)
        .execute(pool)
        .await
        .unwrap();
}

/// Inserts `text` and attaches it to `source_id`.
pub async fn add_from_source(pool: &SqlitePool, source_id: i64, text: &str, date_added: &str) -> i64 {
    let id = insert_address(pool, text, date_added).await;
    link(pool, source_id, text, id).await;
    id
}

pub async fn list(pool: &SqlitePool, relation: &str, text: &str, address_id: i64) {
    let version = AddressCodec::decode(text).unwrap().version();
    let sql = format!(
        "INSERT INTO {relation} (v{}_id_{relation}) VALUES (?)",
        version.number()
    );
    sqlx::query(&sql)
        .bind(address_id)
        .execute(pool)
        .await
        .unwrap();
}
