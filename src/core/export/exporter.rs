//! Collection exporter
//!
//! Reads a whole collection from the document source, normalizes each
//! document and writes one NDJSON file: one compact JSON object per line,
//! UTF-8, non-ASCII left unescaped, retrieval order preserved. An empty
//! collection is a skip, not an error.

use std::path::PathBuf;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{info, warn};

use crate::adapters::traits::DocumentSource;
use crate::core::export::summary::CollectionExportResult;
use crate::core::json::to_json_line;
use crate::core::normalize::normalize_document;
use crate::domain::result::Result;
use crate::domain::run::RunContext;

/// Per-collection exporter
///
/// Holds the run context so every file it produces carries the shared run
/// timestamp.
pub struct Exporter<'a> {
    source: &'a dyn DocumentSource,
    ctx: &'a RunContext,
}

impl<'a> Exporter<'a> {
    pub fn new(source: &'a dyn DocumentSource, ctx: &'a RunContext) -> Self {
        Self { source, ctx }
    }

    /// Export one collection to `{output_dir}/{collection}_{timestamp}.ndjson`
    ///
    /// Returns a skip result (no path, zero count) when the collection is
    /// empty. Serialization and I/O failures propagate; there is no
    /// graceful degradation for documents that cannot be represented.
    pub async fn export_collection(&self, collection: &str) -> Result<CollectionExportResult> {
        let mut docs = self.source.fetch_all(collection).await?;

        if docs.is_empty() {
            warn!(collection = %collection, "Collection is empty, skipping");
            return Ok(CollectionExportResult::skipped(collection));
        }

        let filename = format!("{}_{}.ndjson", collection, self.ctx.started);
        let out_path: PathBuf = self.ctx.output_dir.join(filename);

        let file = File::create(&out_path).await?;
        let mut writer = BufWriter::new(file);

        for doc in docs.iter_mut() {
            // The exporter owns each document exclusively here, so the
            // in-place rewrite cannot be observed elsewhere.
            normalize_document(doc);
            let line = to_json_line(doc)?;
            writer.write_all(line.as_bytes()).await?;
            writer.write_all(b"\n").await?;
        }

        writer.flush().await?;

        info!(
            collection = %collection,
            path = %out_path.display(),
            documents = docs.len(),
            "Exported collection"
        );

        Ok(CollectionExportResult::exported(
            collection,
            out_path,
            docs.len() as u64,
        ))
    }
}
