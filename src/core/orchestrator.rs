//! Run orchestrator
//!
//! Drives one run through its states: validate preconditions, export each
//! configured collection in order, upload each produced file in order,
//! then report. Aborts are fail-fast: a missing required setting stops the
//! run before any connection attempt, zero produced files stops it before
//! any upload, and the first upload failure aborts the remaining uploads
//! with no rollback of files already transferred.

use std::time::Instant;
use tracing::{error, info};

use crate::adapters::traits::{DocumentSource, ObjectStorage};
use crate::core::export::{Exporter, RunStatus, RunSummary};
use crate::domain::result::Result;
use crate::domain::run::RunContext;

/// Orchestrator for one pipeline run
pub struct Orchestrator {
    ctx: RunContext,
}

impl Orchestrator {
    pub fn new(ctx: RunContext) -> Self {
        Self { ctx }
    }

    /// The immutable context this run operates under
    pub fn context(&self) -> &RunContext {
        &self.ctx
    }

    /// Validate run preconditions
    ///
    /// Callers construct the source connector only after this passes, so a
    /// misconfigured run never opens a connection.
    pub fn validate(&self) -> std::result::Result<(), String> {
        self.ctx.validate()
    }

    /// Execute the export and upload phases against the given adapters
    ///
    /// Returns a summary for the statuses that are recoverable into an
    /// exit code (completed, no data). Source, serialization and transfer
    /// failures propagate as errors and abort the run.
    pub async fn execute(
        &self,
        source: &dyn DocumentSource,
        storage: &dyn ObjectStorage,
    ) -> Result<RunSummary> {
        let start = Instant::now();

        info!(
            database = %self.ctx.database,
            collections = self.ctx.collections.len(),
            bucket = %self.ctx.bucket,
            run = %self.ctx.started,
            "Starting run"
        );

        // Exporting: every configured collection, in the order given.
        let exporter = Exporter::new(source, &self.ctx);
        let mut results = Vec::with_capacity(self.ctx.collections.len());
        for collection in &self.ctx.collections {
            let result = exporter.export_collection(collection).await?;
            results.push(result);
        }

        let produced: Vec<_> = results
            .iter()
            .filter_map(|r| r.path.as_ref().cloned())
            .collect();

        if produced.is_empty() {
            error!("No collection produced any data; check names and permissions");
            let mut summary =
                RunSummary::new(RunStatus::NoDataExported).with_duration(start.elapsed());
            summary.collections = results;
            summary.log_summary();
            return Ok(summary);
        }

        // Uploading: first failure propagates and aborts the rest;
        // already-uploaded files stay where they are.
        let mut uploads = Vec::with_capacity(produced.len());
        for path in &produced {
            let outcome = storage.upload(path).await?;
            uploads.push(outcome);
        }

        let mut summary = RunSummary::new(RunStatus::Completed).with_duration(start.elapsed());
        summary.collections = results;
        summary.uploads = uploads;
        summary.log_summary();

        Ok(summary)
    }
}
