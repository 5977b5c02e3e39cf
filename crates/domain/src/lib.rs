//! DoH Client Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod doh_method;
pub mod errors;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_query::DohQuery;
pub use dns_record::{RecordType, ResourceRecord};
pub use doh_method::DohMethod;
pub use errors::DomainError;
