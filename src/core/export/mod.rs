//! Collection export
//!
//! The exporter turns one collection into one NDJSON file; the summary
//! types carry per-collection accounting up to the orchestrator.

pub mod exporter;
pub mod summary;

pub use exporter::Exporter;
pub use summary::{CollectionExportResult, RunStatus, RunSummary};
