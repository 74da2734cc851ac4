//! Configuration management for Ingesta.
//!
//! Configuration is sourced entirely from environment variables (a `.env`
//! file is honored when present). [`loader::load_config`] shapes the raw
//! environment into [`IngestaConfig`]; validation of required settings is
//! split between [`IngestaConfig::validate`] and the orchestrator's
//! precondition step so that a misconfigured run fails before any network
//! I/O with a dedicated exit status.

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{CsvConfig, CsvQuoting, ExportConfig, IngestaConfig, MongoConfig, S3Config};
