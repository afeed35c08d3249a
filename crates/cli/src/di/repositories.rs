use ipdb_application::AddressRepository;
use ipdb_infrastructure::observability::TracingQueryObserver;
use ipdb_infrastructure::repositories::SqliteAddressStore;
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub addresses: Arc<AddressRepository>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        let store = Arc::new(SqliteAddressStore::new(pool));
        let observer = Arc::new(TracingQueryObserver::new());
        Self {
            addresses: Arc::new(AddressRepository::new(store, observer)),
        }
    }
}
