//! Run context
//!
//! A run is one execution of the pipeline from precondition validation
//! through final status reporting. All artifacts of one run share a single
//! UTC timestamp so the produced files correlate with each other.

use chrono::Utc;
use std::path::PathBuf;

/// Format of the shared run timestamp, e.g. `20240101T000000Z`.
const RUN_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Immutable context for one pipeline run
///
/// Constructed once by the configuration layer and passed by reference into
/// the orchestrator; the core never reads ambient global state.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Target database name
    pub database: String,

    /// Collections to export, processed in listed order
    pub collections: Vec<String>,

    /// Destination bucket name
    pub bucket: String,

    /// Optional key prefix applied to every uploaded key
    pub prefix: Option<String>,

    /// Local staging directory for NDJSON files
    pub output_dir: PathBuf,

    /// UTC timestamp shared by all filenames produced in this run
    pub started: String,
}

impl RunContext {
    /// Create a run context, generating the shared timestamp now
    pub fn new(
        database: String,
        collections: Vec<String>,
        bucket: String,
        prefix: Option<String>,
        output_dir: PathBuf,
    ) -> Self {
        Self {
            database,
            collections,
            bucket,
            prefix,
            output_dir,
            started: Utc::now().format(RUN_TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// Validate run preconditions
    ///
    /// Checks that the database name, collection list and destination bucket
    /// are all present. This runs before any connection attempt so a
    /// misconfigured run wastes no network I/O.
    pub fn validate(&self) -> Result<(), String> {
        if self.database.is_empty() {
            return Err("MONGO_DB is required but not set".to_string());
        }
        if self.collections.is_empty() {
            return Err("COLLECTIONS is required but empty".to_string());
        }
        if self.bucket.is_empty() {
            return Err("S3_BUCKET is required but not set".to_string());
        }
        Ok(())
    }
}
