use std::io;
use std::path::PathBuf;

/// Errors produced while loading job properties.
///
/// Mnemonic values are never a source of errors; only reading and decoding the
/// surrounding JSON document can fail.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The properties file could not be read.
    #[error("failed to read job properties from {}: {source}", path.display())]
    Read {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The properties file is not a JSON object of string values.
    #[error("failed to parse job properties from {}: {source}", path.display())]
    Parse {
        /// Path whose contents failed to parse.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// An in-memory properties document is not a JSON object of string values.
    #[error("invalid job properties document: {0}")]
    Document(#[from] serde_json::Error),
}

impl ConfigError {
    /// Returns the path associated with the error, if any.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => Some(path),
            Self::Document(_) => None,
        }
    }
}
