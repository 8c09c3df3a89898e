//! Error types for the VDXF facade.

use thiserror::Error;
use vdxf_core::NameError;

/// Errors that can occur during VDXF operations.
#[derive(Debug, Error)]
pub enum VdxfError {
    /// The name was rejected by canonicalization.
    #[error("invalid name {name:?}: {source}")]
    Name {
        name: String,
        #[source]
        source: NameError,
    },

    /// Configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Configuration file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is not valid JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl VdxfError {
    pub(crate) fn name(name: &str, source: NameError) -> Self {
        Self::Name {
            name: name.to_string(),
            source,
        }
    }
}

/// Result type for VDXF operations.
pub type Result<T> = std::result::Result<T, VdxfError>;
