//! Configuration schema types
//!
//! This module defines the configuration structure for Ingesta. The
//! configuration is sourced entirely from environment variables (see
//! [`super::loader`]); the structs here give it shape and validation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::RunContext;

/// CSV quoting style
///
/// Reserved: the CSV knobs are part of the accepted environment surface but
/// are not consumed by the NDJSON export path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CsvQuoting {
    /// Quote only fields that need it
    #[default]
    Minimal,
    /// Quote every field
    All,
    /// Quote non-numeric fields
    NonNumeric,
    /// Never quote
    None,
}

impl CsvQuoting {
    /// Parse from the CSV_QUOTE environment value; unknown names fall back
    /// to minimal quoting.
    pub fn parse(value: &str) -> Self {
        match value.to_uppercase().as_str() {
            "ALL" => CsvQuoting::All,
            "NONNUMERIC" => CsvQuoting::NonNumeric,
            "NONE" => CsvQuoting::None,
            _ => CsvQuoting::Minimal,
        }
    }
}

/// Main Ingesta configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestaConfig {
    /// MongoDB connection parameters
    pub mongo: MongoConfig,

    /// Export settings
    pub export: ExportConfig,

    /// S3 destination settings
    pub s3: S3Config,

    /// CSV settings (reserved, unused by the NDJSON path)
    pub csv: CsvConfig,
}

impl IngestaConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any required setting is absent or invalid
    pub fn validate(&self) -> Result<(), String> {
        self.mongo.validate()?;
        self.export.validate()?;
        self.s3.validate()?;
        Ok(())
    }

    /// Build the immutable run context for one pipeline run
    ///
    /// The shared run timestamp is generated here, once, so every file
    /// produced by this invocation carries the same suffix.
    pub fn run_context(&self) -> RunContext {
        RunContext::new(
            self.mongo.database.clone(),
            self.export.collections.clone(),
            self.s3.bucket.clone(),
            self.s3.prefix.clone(),
            self.export.output_dir.clone(),
        )
    }
}

/// MongoDB connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoConfig {
    /// Hostname of the MongoDB deployment
    pub host: String,

    /// Port of the MongoDB deployment
    pub port: u16,

    /// Target database name
    pub database: String,

    /// Username; credentials are only used when both username and
    /// password are present
    pub username: Option<String>,

    /// Password
    pub password: Option<String>,

    /// Authentication database
    pub auth_database: String,
}

impl MongoConfig {
    fn validate(&self) -> Result<(), String> {
        if self.database.is_empty() {
            return Err("MONGO_DB is required but not set".to_string());
        }
        if self.host.is_empty() {
            return Err("MONGO_HOST must not be empty".to_string());
        }
        Ok(())
    }
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Collections to export, in the order given
    pub collections: Vec<String>,

    /// Local staging directory for NDJSON files, created if absent
    pub output_dir: PathBuf,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.collections.is_empty() {
            return Err("COLLECTIONS is required but empty".to_string());
        }
        Ok(())
    }
}

/// S3 destination configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3Config {
    /// Destination bucket name
    pub bucket: String,

    /// Optional key prefix applied to every uploaded key
    pub prefix: Option<String>,

    /// Object-storage region
    pub region: String,
}

impl S3Config {
    fn validate(&self) -> Result<(), String> {
        if self.bucket.is_empty() {
            return Err("S3_BUCKET is required but not set".to_string());
        }
        Ok(())
    }
}

/// CSV output configuration
///
/// Accepted for compatibility with the wider deployment environment but
/// not exercised by the NDJSON pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvConfig {
    /// Field separator
    pub separator: String,

    /// Quoting style
    pub quoting: CsvQuoting,

    /// Line terminator
    pub line_terminator: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            separator: ",".to_string(),
            quoting: CsvQuoting::Minimal,
            line_terminator: "\n".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> IngestaConfig {
        IngestaConfig {
            mongo: MongoConfig {
                host: "localhost".to_string(),
                port: 27017,
                database: "appdb".to_string(),
                username: None,
                password: None,
                auth_database: "admin".to_string(),
            },
            export: ExportConfig {
                collections: vec!["users".to_string(), "orders".to_string()],
                output_dir: PathBuf::from("/app/out"),
            },
            s3: S3Config {
                bucket: "backups".to_string(),
                prefix: None,
                region: "us-east-1".to_string(),
            },
            csv: CsvConfig::default(),
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validate_missing_database() {
        let mut config = valid_config();
        config.mongo.database.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_missing_collections() {
        let mut config = valid_config();
        config.export.collections.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_missing_bucket() {
        let mut config = valid_config();
        config.s3.bucket.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_run_context_carries_settings() {
        let config = valid_config();
        let ctx = config.run_context();
        assert_eq!(ctx.database, "appdb");
        assert_eq!(ctx.collections, vec!["users", "orders"]);
        assert_eq!(ctx.bucket, "backups");
        assert_eq!(ctx.prefix, None);
        assert_eq!(ctx.output_dir, PathBuf::from("/app/out"));
    }

    #[test]
    fn test_csv_quoting_parse() {
        assert_eq!(CsvQuoting::parse("MINIMAL"), CsvQuoting::Minimal);
        assert_eq!(CsvQuoting::parse("all"), CsvQuoting::All);
        assert_eq!(CsvQuoting::parse("NonNumeric"), CsvQuoting::NonNumeric);
        assert_eq!(CsvQuoting::parse("NONE"), CsvQuoting::None);
        assert_eq!(CsvQuoting::parse("bogus"), CsvQuoting::Minimal);
    }
}
