//! Configuration loader
//!
//! This module builds the [`IngestaConfig`] from environment variables.
//! A `.env` file, when present, is loaded by `main` via `dotenvy` before
//! this runs. Required settings are checked by `IngestaConfig::validate`
//! (and again by the orchestrator's precondition step); this loader only
//! shapes the raw environment into typed values.

use super::schema::{CsvConfig, CsvQuoting, ExportConfig, IngestaConfig, MongoConfig, S3Config};
use crate::domain::errors::IngestaError;
use crate::domain::result::Result;
use std::path::PathBuf;

const DEFAULT_MONGO_HOST: &str = "localhost";
const DEFAULT_MONGO_PORT: u16 = 27017;
const DEFAULT_AUTH_DATABASE: &str = "admin";
const DEFAULT_OUTPUT_DIR: &str = "/app/out";
const DEFAULT_REGION: &str = "us-east-1";

/// Loads configuration from the process environment
///
/// Recognized keys: `MONGO_HOST`, `MONGO_PORT`, `MONGO_DB`, `MONGO_USER`,
/// `MONGO_PASSWORD`, `MONGO_AUTH_DB`, `COLLECTIONS`, `OUTPUT_DIR`,
/// `S3_BUCKET`, `S3_PREFIX`, `AWS_DEFAULT_REGION`/`AWS_REGION`, and the
/// reserved `CSV_SEP`/`CSV_QUOTE`/`CSV_LINE_TERMINATOR` knobs.
///
/// # Errors
///
/// Returns a configuration error if `MONGO_PORT` is not a valid port
/// number. Missing required keys do not fail here; they surface through
/// validation with a dedicated exit status.
pub fn load_config() -> Result<IngestaConfig> {
    let port = match env_var("MONGO_PORT") {
        Some(raw) => raw.parse::<u16>().map_err(|e| {
            IngestaError::Configuration(format!("Invalid MONGO_PORT '{raw}': {e}"))
        })?,
        None => DEFAULT_MONGO_PORT,
    };

    let mongo = MongoConfig {
        host: env_var("MONGO_HOST").unwrap_or_else(|| DEFAULT_MONGO_HOST.to_string()),
        port,
        database: env_var("MONGO_DB").unwrap_or_default(),
        username: env_var("MONGO_USER"),
        password: env_var("MONGO_PASSWORD"),
        auth_database: env_var("MONGO_AUTH_DB")
            .unwrap_or_else(|| DEFAULT_AUTH_DATABASE.to_string()),
    };

    let export = ExportConfig {
        collections: parse_collections(&env_var("COLLECTIONS").unwrap_or_default()),
        output_dir: env_var("OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
    };

    let s3 = S3Config {
        bucket: env_var("S3_BUCKET").unwrap_or_default(),
        prefix: env_var("S3_PREFIX"),
        // AWS_DEFAULT_REGION wins over AWS_REGION, matching the deployment
        // environment this tool is dropped into.
        region: env_var("AWS_DEFAULT_REGION")
            .or_else(|| env_var("AWS_REGION"))
            .unwrap_or_else(|| DEFAULT_REGION.to_string()),
    };

    let csv = CsvConfig {
        separator: std::env::var("CSV_SEP").unwrap_or_else(|_| ",".to_string()),
        quoting: CsvQuoting::parse(&std::env::var("CSV_QUOTE").unwrap_or_default()),
        line_terminator: std::env::var("CSV_LINE_TERMINATOR").unwrap_or_else(|_| "\n".to_string()),
    };

    Ok(IngestaConfig {
        mongo,
        export,
        s3,
        csv,
    })
}

/// Read an environment variable, treating empty values as unset
fn env_var(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

/// Split the comma-separated collection list, trimming whitespace and
/// dropping empty entries
fn parse_collections(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_collections_basic() {
        assert_eq!(
            parse_collections("users,orders,events"),
            vec!["users", "orders", "events"]
        );
    }

    #[test]
    fn test_parse_collections_trims_and_drops_empty() {
        assert_eq!(
            parse_collections(" users , ,orders,, "),
            vec!["users", "orders"]
        );
    }

    #[test]
    fn test_parse_collections_empty_input() {
        assert!(parse_collections("").is_empty());
        assert!(parse_collections(" , ,").is_empty());
    }

    #[test]
    fn test_env_var_empty_is_unset() {
        std::env::set_var("INGESTA_TEST_EMPTY_VAR", "");
        assert_eq!(env_var("INGESTA_TEST_EMPTY_VAR"), None);
        std::env::remove_var("INGESTA_TEST_EMPTY_VAR");
    }

    // MONGO_PORT is process-global, so defaults and the invalid-port case
    // share one test to keep parallel test threads from clashing on it.
    #[test]
    fn test_load_config_port_handling() {
        for key in [
            "MONGO_HOST",
            "MONGO_PORT",
            "MONGO_AUTH_DB",
            "OUTPUT_DIR",
            "AWS_DEFAULT_REGION",
            "AWS_REGION",
            "CSV_SEP",
        ] {
            std::env::remove_var(key);
        }

        let config = load_config().unwrap();
        assert_eq!(config.mongo.host, "localhost");
        assert_eq!(config.mongo.port, 27017);
        assert_eq!(config.mongo.auth_database, "admin");
        assert_eq!(config.export.output_dir, PathBuf::from("/app/out"));
        assert_eq!(config.s3.region, "us-east-1");
        assert_eq!(config.csv.separator, ",");

        std::env::set_var("MONGO_PORT", "not-a-port");
        let result = load_config();
        std::env::remove_var("MONGO_PORT");

        let err = result.unwrap_err();
        assert!(err.to_string().contains("MONGO_PORT"));
    }
}
