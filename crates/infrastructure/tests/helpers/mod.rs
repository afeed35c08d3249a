mod address_db;

pub use address_db::*;
