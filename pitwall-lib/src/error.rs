use std::path::PathBuf;

use pitwall_core::MetadataError;
use thiserror::Error;

/// Errors that can occur while processing a single car or track.
///
/// These never abort a scan: the scanner logs them and moves on to the next item.
#[derive(Debug, Error)]
pub enum ScanError {
    /// I/O error while listing a folder or reading a metadata file
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Metadata could not be interpreted even after repair
    #[error("{source} in {} (content starts: {snippet:?})", .path.display())]
    Metadata {
        path: PathBuf,
        snippet: String,
        #[source]
        source: MetadataError,
    },
}

impl ScanError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The file or folder the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } | Self::Metadata { path, .. } => path,
        }
    }
}
