use ipdb_domain::{DateWindow, ListKind, PageSpec};

/// Summary of a completed repository operation.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryEvent {
    AddressesBySource {
        source_name: String,
        page: Option<PageSpec>,
        found: usize,
    },
    AddressesInRange {
        start: String,
        end: String,
        page: Option<PageSpec>,
        found: usize,
    },
    Classified {
        address: String,
        list: Option<ListKind>,
    },
    AddressesAddedBetween {
        window: DateWindow,
        page: Option<PageSpec>,
        found: usize,
    },
    SourcesModifiedBetween {
        window: DateWindow,
        page: Option<PageSpec>,
        found: usize,
    },
    Contains {
        address: String,
        found: bool,
    },
}

impl QueryEvent {
    pub fn operation(&self) -> &'static str {
        match self {
            QueryEvent::AddressesBySource { .. } => "addresses_by_source",
            QueryEvent::AddressesInRange { .. } => "addresses_in_range",
            QueryEvent::Classified { .. } => "classify",
            QueryEvent::AddressesAddedBetween { .. } => "addresses_added_between",
            QueryEvent::SourcesModifiedBetween { .. } => "sources_modified_between",
            QueryEvent::Contains { .. } => "contains",
        }
    }
}

/// Receives one event per completed operation. Reporting is infallible so
/// it cannot change an operation's outcome.
pub trait QueryObserver: Send + Sync {
    fn report(&self, event: &QueryEvent);
}
