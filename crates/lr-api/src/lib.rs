// lr-api: Async Rust client for the LoginRadius admin-console API

pub mod apps;
pub mod client;
pub mod error;
pub mod models;
pub mod schema;
pub mod transport;

pub use client::AdminClient;
pub use error::Error;
pub use transport::TransportConfig;
