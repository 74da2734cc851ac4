//! External integrations
//!
//! Thin adapters over the MongoDB driver and the AWS S3 SDK, behind the
//! traits in [`traits`] so the pipeline core stays testable offline.

pub mod mongo;
pub mod s3;
pub mod traits;

pub use traits::{DocumentSource, ObjectStorage, TransferOutcome};
