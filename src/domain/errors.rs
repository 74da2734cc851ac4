//! Domain error types
//!
//! This module defines the error hierarchy for Ingesta. All errors are
//! domain-specific and don't expose third-party types: MongoDB driver and
//! AWS SDK errors are mapped to strings at the adapter boundary.

use thiserror::Error;

/// Main Ingesta error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum IngestaError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Document source errors (MongoDB)
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Object storage transfer errors (S3)
    #[error("Transfer error: {0}")]
    Transfer(#[from] TransferError),

    /// A document value has no plain-JSON representation
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Document-source-specific errors
///
/// Errors that occur when talking to the MongoDB deployment.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Failed to open a connection to the document store
    #[error("Failed to connect to MongoDB: {0}")]
    ConnectionFailed(String),

    /// A collection read failed mid-stream
    #[error("Query failed for collection '{collection}': {message}")]
    QueryFailed { collection: String, message: String },
}

/// Transfer-specific errors
///
/// Both variants are fatal to the run: the orchestrator aborts remaining
/// uploads on the first failure and performs no rollback.
#[derive(Debug, Error)]
pub enum TransferError {
    /// AWS credentials are missing or incomplete
    #[error("AWS credentials missing or incomplete: {0}")]
    MissingCredentials(String),

    /// The storage service rejected or failed the upload
    #[error("Upload to s3://{bucket}/{key} failed: {message}")]
    Service {
        bucket: String,
        key: String,
        message: String,
    },
}

// Conversion from std::io::Error
impl From<std::io::Error> for IngestaError {
    fn from(err: std::io::Error) -> Self {
        IngestaError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for IngestaError {
    fn from(err: serde_json::Error) -> Self {
        IngestaError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingesta_error_display() {
        let err = IngestaError::Configuration("MONGO_DB is not set".to_string());
        assert_eq!(err.to_string(), "Configuration error: MONGO_DB is not set");
    }

    #[test]
    fn test_source_error_conversion() {
        let source_err = SourceError::ConnectionFailed("refused".to_string());
        let err: IngestaError = source_err.into();
        assert!(matches!(err, IngestaError::Source(_)));
    }

    #[test]
    fn test_transfer_error_conversion() {
        let transfer_err = TransferError::MissingCredentials("no provider".to_string());
        let err: IngestaError = transfer_err.into();
        assert!(matches!(err, IngestaError::Transfer(_)));
    }

    #[test]
    fn test_transfer_service_error_display() {
        let err = TransferError::Service {
            bucket: "backups".to_string(),
            key: "users_20240101T000000Z.ndjson".to_string(),
            message: "access denied".to_string(),
        };
        assert!(err
            .to_string()
            .contains("s3://backups/users_20240101T000000Z.ndjson"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: IngestaError = io_err.into();
        assert!(matches!(err, IngestaError::Io(_)));
    }

    #[test]
    fn test_error_implements_std_error() {
        let err = IngestaError::Serialization("test".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
