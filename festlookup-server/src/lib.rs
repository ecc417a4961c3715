//! festlookup-server: HTTP lookup service for festival names
//!
//! Given a date and an Indian district name, queries PostgreSQL for
//! matching festival/holiday names and returns them as a JSON list.
//! The service is read-only and stateless; each request opens its own
//! database connection for the duration of one query.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::DbConfig;
pub use http::{run_server, ServerConfig};
