//! ConoHa DNS provider: authenticates against the ConoHa identity service and
//! manages the records of one domain through the DNS service API.

pub mod api;
pub mod config;
pub mod error;


pub use api::{ConohaProvider, DnsProvider, Record, Session};
pub use config::Config;
pub use error::{ProviderError, Result};
