// Ingesta - MongoDB to S3 NDJSON Export Tool
// Copyright (c) 2025 Ingesta Contributors
// Licensed under the MIT License

//! # Ingesta - MongoDB to S3 NDJSON Export
//!
//! Ingesta is an ETL tool built in Rust that exports MongoDB collections as
//! newline-delimited JSON files and uploads them to Amazon S3.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Extracting** documents from named MongoDB collections
//! - **Normalizing** ObjectId values into their plain string form
//! - **Serializing** documents as NDJSON, one compact JSON object per line
//! - **Transferring** the produced files to an S3 bucket
//!
//! ## Architecture
//!
//! Ingesta follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (normalize, serialize, export, orchestration)
//! - [`adapters`] - External integrations (MongoDB, S3)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ingesta::adapters::mongo::MongoSource;
//! use ingesta::adapters::s3::S3Transfer;
//! use ingesta::config::load_config;
//! use ingesta::core::Orchestrator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config()?;
//!     let orchestrator = Orchestrator::new(config.run_context());
//!     orchestrator.validate()?;
//!
//!     let source = MongoSource::connect(&config.mongo).await?;
//!     let storage = S3Transfer::new(&config.s3).await;
//!
//!     let summary = orchestrator.execute(&source, &storage).await?;
//!     println!("Exported {} documents", summary.total_documents());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Ingesta uses the [`domain::IngestaError`] type for all errors. Errors from
//! the MongoDB and S3 clients are mapped into domain variants so callers never
//! depend on third-party error types:
//!
//! ```rust,no_run
//! use ingesta::domain::{IngestaError, Result};
//!
//! fn example() -> Result<()> {
//!     let config = ingesta::config::load_config()?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Ingesta uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn, error};
//!
//! # let err = std::io::Error::new(std::io::ErrorKind::Other, "example");
//! info!("Starting run");
//! warn!(collection = "users", "Collection is empty, skipping");
//! error!(error = ?err, "Upload failed");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
