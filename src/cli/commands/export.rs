//! Export command implementation
//!
//! Loads configuration from the environment, validates run preconditions,
//! then drives the orchestrator: one NDJSON file per non-empty collection,
//! each uploaded to the configured bucket.

use clap::Args;
use tracing::error;

use crate::adapters::mongo::MongoSource;
use crate::adapters::s3::S3Transfer;
use crate::config::load_config;
use crate::core::export::RunStatus;
use crate::core::Orchestrator;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Override the collection list (comma-separated)
    #[arg(long)]
    pub collections: Option<String>,

    /// Override the destination bucket
    #[arg(long)]
    pub bucket: Option<String>,
}

impl ExportArgs {
    /// Execute the export command, returning the process exit code
    pub async fn execute(&self) -> anyhow::Result<i32> {
        let mut config = load_config()?;

        // Apply CLI overrides
        if let Some(collections) = &self.collections {
            config.export.collections = collections
                .split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(bucket) = &self.bucket {
            config.s3.bucket = bucket.clone();
        }

        let orchestrator = Orchestrator::new(config.run_context());

        // Preconditions come first: a misconfigured run must not open a
        // connection or touch the output directory.
        if let Err(msg) = orchestrator.validate() {
            error!(error = %msg, "Configuration validation failed");
            eprintln!("Missing required configuration: {msg}");
            return Ok(RunStatus::ConfigurationError.exit_code());
        }

        tokio::fs::create_dir_all(&config.export.output_dir).await?;

        let source = MongoSource::connect(&config.mongo).await?;
        let storage = S3Transfer::new(&config.s3).await;

        let summary = orchestrator.execute(&source, &storage).await?;

        println!("Export summary:");
        for result in &summary.collections {
            match &result.path {
                Some(path) => println!(
                    "  [OK] {} -> {} ({} documents)",
                    result.collection,
                    path.display(),
                    result.documents
                ),
                None => println!("  [SKIP] {} (empty)", result.collection),
            }
        }
        for upload in &summary.uploads {
            println!(
                "  [OK] {} -> s3://{}/{}",
                upload.source.display(),
                upload.bucket,
                upload.key
            );
        }

        Ok(summary.status.exit_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_args_defaults() {
        let args = ExportArgs {
            collections: None,
            bucket: None,
        };
        assert!(args.collections.is_none());
        assert!(args.bucket.is_none());
    }
}
