//! Export results and run summary
//!
//! This module defines the per-collection accounting record, the terminal
//! run statuses and the summary the orchestrator reports at the end of
//! every run.

use std::path::PathBuf;
use std::time::Duration;

use crate::adapters::traits::TransferOutcome;

/// Outcome of exporting one collection
///
/// Created once per collection by the exporter and immutable after
/// creation. A `path` of `None` marks a skipped (empty) collection.
#[derive(Debug, Clone)]
pub struct CollectionExportResult {
    /// Collection name
    pub collection: String,

    /// Path of the produced NDJSON file, or `None` when skipped
    pub path: Option<PathBuf>,

    /// Number of documents written
    pub documents: u64,
}

impl CollectionExportResult {
    /// Result for a collection that produced a file
    pub fn exported(collection: impl Into<String>, path: PathBuf, documents: u64) -> Self {
        Self {
            collection: collection.into(),
            path: Some(path),
            documents,
        }
    }

    /// Result for an empty collection that was skipped
    pub fn skipped(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            path: None,
            documents: 0,
        }
    }

    /// Whether this collection produced a file
    pub fn was_exported(&self) -> bool {
        self.path.is_some()
    }
}

/// Terminal status of a run
///
/// Fatal source, serialization and transfer errors are not statuses; they
/// propagate as errors and terminate the process through the error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// All collections processed and all produced files transferred
    Completed,

    /// A required setting was absent; nothing was attempted
    ConfigurationError,

    /// Every configured collection was empty; no upload was attempted
    NoDataExported,
}

impl RunStatus {
    /// Process exit code for this status
    pub fn exit_code(&self) -> i32 {
        match self {
            RunStatus::Completed => 0,
            RunStatus::ConfigurationError => 1,
            RunStatus::NoDataExported => 2,
        }
    }
}

/// Summary of one pipeline run
#[derive(Debug)]
pub struct RunSummary {
    /// Terminal status
    pub status: RunStatus,

    /// Per-collection results, in processing order
    pub collections: Vec<CollectionExportResult>,

    /// Successful transfers, in upload order
    pub uploads: Vec<TransferOutcome>,

    /// Duration of the run
    pub duration: Duration,
}

impl RunSummary {
    /// Create a summary with the given terminal status
    pub fn new(status: RunStatus) -> Self {
        Self {
            status,
            collections: Vec::new(),
            uploads: Vec::new(),
            duration: Duration::from_secs(0),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Total documents written across all collections
    pub fn total_documents(&self) -> u64 {
        self.collections.iter().map(|c| c.documents).sum()
    }

    /// Number of collections that produced a file
    pub fn exported_count(&self) -> usize {
        self.collections.iter().filter(|c| c.was_exported()).count()
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            status = ?self.status,
            collections = self.collections.len(),
            exported = self.exported_count(),
            uploaded = self.uploads.len(),
            total_documents = self.total_documents(),
            duration_secs = format!("{:.1}", self.duration.as_secs_f64()),
            "Run finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exported_result() {
        let result =
            CollectionExportResult::exported("users", PathBuf::from("/out/users.ndjson"), 5);
        assert!(result.was_exported());
        assert_eq!(result.documents, 5);
    }

    #[test]
    fn test_skipped_result() {
        let result = CollectionExportResult::skipped("empty");
        assert!(!result.was_exported());
        assert_eq!(result.documents, 0);
        assert_eq!(result.path, None);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(RunStatus::Completed.exit_code(), 0);
        assert_eq!(RunStatus::ConfigurationError.exit_code(), 1);
        assert_eq!(RunStatus::NoDataExported.exit_code(), 2);
    }

    #[test]
    fn test_summary_accounting() {
        let mut summary = RunSummary::new(RunStatus::Completed);
        summary.collections.push(CollectionExportResult::exported(
            "users",
            PathBuf::from("/out/users.ndjson"),
            5,
        ));
        summary
            .collections
            .push(CollectionExportResult::skipped("empty"));

        assert_eq!(summary.total_documents(), 5);
        assert_eq!(summary.exported_count(), 1);
    }
}
