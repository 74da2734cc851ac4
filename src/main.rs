// Ingesta - MongoDB to S3 NDJSON Export Tool
// Copyright (c) 2025 Ingesta Contributors
// Licensed under the MIT License

use clap::Parser;
use ingesta::cli::{Cli, Commands};
use ingesta::logging::init_logging;
use std::process;
use std::time::Instant;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    // This is optional - if .env doesn't exist, it's silently ignored
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli.log_level) {
        eprintln!("Failed to initialize logging: {e}");
        process::exit(1);
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Ingesta - MongoDB to S3 NDJSON Export Tool"
    );

    let start = Instant::now();

    // Execute command and get exit code
    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            1
        }
    };

    println!("Total duration: {:.1}s", start.elapsed().as_secs_f64());

    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Export(args) => args.execute().await,
        Commands::ValidateConfig(args) => args.execute().await,
    }
}
