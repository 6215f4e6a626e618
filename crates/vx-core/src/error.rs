//! Error types shared by the core crate

use thiserror::Error;

/// Errors produced by document, format and script operations
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("unknown file format: {0}")]
    UnknownFormat(String),

    #[error("format {format} cannot {operation}")]
    FormatCapability {
        format: String,
        operation: &'static str,
    },

    #[error("unknown script: {0}")]
    UnknownScript(String),

    #[error("script {name} failed: {message}")]
    Script { name: String, message: String },
}
