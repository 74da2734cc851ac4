//! Result type alias for Ingesta
//!
//! This module provides a convenient Result type alias that uses
//! IngestaError as the error type.

use super::errors::IngestaError;

/// Result type alias for Ingesta operations
///
/// This is a convenience type alias that uses `IngestaError` as the error
/// type. Use this throughout the codebase for fallible operations.
pub type Result<T> = std::result::Result<T, IngestaError>;
