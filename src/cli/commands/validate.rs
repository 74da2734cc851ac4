//! Validate-config command implementation
//!
//! Loads the environment configuration and runs validation without opening
//! any connection, so a deployment can be checked before it runs.

use clap::Args;

use crate::config::load_config;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command, returning the process exit code
    pub async fn execute(&self) -> anyhow::Result<i32> {
        let config = load_config()?;

        match config.validate() {
            Ok(()) => {
                println!("Configuration is valid");
                println!("  Database:    {}", config.mongo.database);
                println!("  Collections: {}", config.export.collections.join(", "));
                println!("  Output dir:  {}", config.export.output_dir.display());
                println!("  Bucket:      {}", config.s3.bucket);
                if let Some(prefix) = &config.s3.prefix {
                    println!("  Prefix:      {prefix}");
                }
                println!("  Region:      {}", config.s3.region);
                Ok(0)
            }
            Err(msg) => {
                eprintln!("Configuration invalid: {msg}");
                Ok(1)
            }
        }
    }
}
