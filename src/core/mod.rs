//! Pipeline core
//!
//! Business logic for the extract → normalize → serialize → transfer
//! pipeline: identifier normalization, JSON line encoding, per-collection
//! export and run orchestration.

pub mod export;
pub mod json;
pub mod normalize;
pub mod orchestrator;

pub use export::{CollectionExportResult, Exporter, RunStatus, RunSummary};
pub use orchestrator::Orchestrator;
