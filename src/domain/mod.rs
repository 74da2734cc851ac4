//! Core domain types
//!
//! This module contains the error taxonomy, the shared `Result` alias and
//! the immutable run context that correlates all artifacts of one run.

pub mod errors;
pub mod result;
pub mod run;

// Re-export commonly used types
pub use errors::{IngestaError, SourceError, TransferError};
pub use result::Result;
pub use run::RunContext;
