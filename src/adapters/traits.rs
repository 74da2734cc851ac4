//! Adapter traits
//!
//! These traits are the seams between the pipeline core and the external
//! services it talks to. The core drives `DocumentSource` and
//! `ObjectStorage` through trait objects so tests can substitute in-memory
//! implementations for a live MongoDB deployment or S3 bucket.

use async_trait::async_trait;
use mongodb::bson::Document;
use std::path::Path;

use crate::domain::errors::{SourceError, TransferError};

/// A source of documents, one named collection at a time
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetch the complete contents of a collection
    ///
    /// No filter, no projection, no pagination: the entire collection is
    /// materialized in memory at once. This is a known peak-memory
    /// limitation for large collections, carried over deliberately from
    /// the deployment this tool replaces.
    async fn fetch_all(&self, collection: &str) -> Result<Vec<Document>, SourceError>;
}

/// Successful transfer of one local file to object storage
#[derive(Debug, Clone)]
pub struct TransferOutcome {
    /// Local file that was uploaded
    pub source: std::path::PathBuf,

    /// Destination bucket
    pub bucket: String,

    /// Destination key within the bucket
    pub key: String,
}

/// A destination for produced files
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Transfer the full contents of a local file to the configured bucket
    ///
    /// No retry and no partial-upload cleanup: a failure here is fatal to
    /// the run and files uploaded earlier are left in place.
    async fn upload(&self, local_path: &Path) -> Result<TransferOutcome, TransferError>;
}
