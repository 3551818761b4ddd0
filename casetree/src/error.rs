//! Error types for reading an export and writing its document tree.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Everything that can stop an export. None of these are recovered from;
/// output written before the failure is left on disk.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("unable to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' is not a valid export document: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed export: {0}")]
    Structural(String),

    #[error("unable to write '{}': {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse failure classes reported at the process boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Input,
    Structural,
    Filesystem,
}

impl ExportError {
    pub fn filesystem(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        ExportError::Filesystem {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn structural(context: impl Into<String>) -> Self {
        ExportError::Structural(context.into())
    }

    /// Prefix a structural error with where in the tree it was found.
    #[must_use]
    pub fn within(self, location: &str) -> Self {
        match self {
            ExportError::Structural(msg) => ExportError::Structural(format!("{location}: {msg}")),
            other => other,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ExportError::Read { .. } | ExportError::Parse { .. } => ErrorKind::Input,
            ExportError::Structural(_) => ErrorKind::Structural,
            ExportError::Filesystem { .. } => ErrorKind::Filesystem,
        }
    }
}
