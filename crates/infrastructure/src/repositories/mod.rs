mod address_row_mapper;
pub mod address_store;

pub use address_store::SqliteAddressStore;
