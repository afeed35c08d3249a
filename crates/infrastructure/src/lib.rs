//! SQLite and tracing adapters for the ipdb ports.
pub mod database;
pub mod observability;
pub mod repositories;
