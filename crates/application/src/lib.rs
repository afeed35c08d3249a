//! ipdb application layer: datastore ports, statement building and the
//! repository facade.
pub mod address_repository;
pub mod ports;
pub mod services;

pub use address_repository::AddressRepository;
