use thiserror::Error;

/// Errors that can occur while interpreting a metadata file.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// Every repair strategy failed; carries the error from the initial strict parse
    #[error("Unrecoverable metadata: {0}")]
    Parse(#[from] serde_json::Error),
}
