use crate::address::IpVersion;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid IP address: {0}")]
    InvalidAddress(String),

    #[error("Range endpoints differ in IP version: start is IPv{start}, end is IPv{end}")]
    VersionMismatch { start: IpVersion, end: IpVersion },

    #[error("End date {end} is before start date {start}")]
    InvalidRange { start: String, end: String },

    #[error("Integrity violation: {0}")]
    IntegrityViolation(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
