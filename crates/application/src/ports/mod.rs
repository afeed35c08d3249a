mod address_store;
mod query_observer;

pub use address_store::AddressStore;
pub use query_observer::{QueryEvent, QueryObserver};
