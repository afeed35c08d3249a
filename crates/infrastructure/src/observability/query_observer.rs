use ipdb_application::ports::{QueryEvent, QueryObserver};
use tracing::debug;

/// Emits each completed operation as a structured `debug` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingQueryObserver;

impl TracingQueryObserver {
    pub fn new() -> Self {
        Self
    }
}

impl QueryObserver for TracingQueryObserver {
    fn report(&self, event: &QueryEvent) {
        let operation = event.operation();
        match event {
            QueryEvent::AddressesBySource {
                source_name,
                page,
                found,
            } => debug!(
                operation,
                source_name = %source_name,
                page = ?page,
                found,
                "Searched addresses by source"
            ),
            QueryEvent::AddressesInRange {
                start,
                end,
                page,
                found,
            } => debug!(
                operation,
                start = %start,
                end = %end,
                page = ?page,
                found,
                "Searched addresses in range"
            ),
            QueryEvent::Classified { address, list } => debug!(
                operation,
                address = %address,
                list = ?list,
                "Resolved list type"
            ),
            QueryEvent::AddressesAddedBetween {
                window,
                page,
                found,
            } => debug!(
                operation,
                window = %window,
                page = ?page,
                found,
                "Searched addresses added in window"
            ),
            QueryEvent::SourcesModifiedBetween {
                window,
                page,
                found,
            } => debug!(
                operation,
                window = %window,
                page = ?page,
                found,
                "Searched sources modified in window"
            ),
            QueryEvent::Contains { address, found } => debug!(
                operation,
                address = %address,
                found,
                "Checked address presence"
            ),
        }
    }
}
