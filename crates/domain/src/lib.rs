//! ipdb domain layer
pub mod address;
pub mod address_record;
pub mod config;
pub mod date_window;
pub mod errors;
pub mod list_kind;
pub mod page;
pub mod source;

pub use address::{AddressCodec, AddressValue, IpVersion, StorageValue};
pub use address_record::{AddressRecord, RowAttributes};
pub use config::{CliOverrides, Config};
pub use date_window::DateWindow;
pub use errors::DomainError;
pub use list_kind::ListKind;
pub use page::PageSpec;
pub use source::Source;
