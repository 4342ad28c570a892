pub mod client;
pub mod conoha;
pub mod models;
pub mod names;
pub mod session;

pub use client::DnsProvider;
pub use conoha::ConohaProvider;
pub use models::Record;
pub use session::Session;
