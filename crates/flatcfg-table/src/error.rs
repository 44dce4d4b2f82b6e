use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

/// Why a [`ConfigTable`](crate::ConfigTable) ended up invalid.
///
/// Every variant is terminal for the load attempt that produced it.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    #[error("cannot open/read file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: Arc<std::io::Error>,
    },

    /// A non-blank line without a separator. `line` is 1-based.
    #[error("missing separator on line {line}: {content}")]
    MissingSeparator { line: usize, content: String },

    #[error("duplicate key: {key}")]
    DuplicateKey { key: String },

    #[error("config table was never loaded")]
    NotLoaded,
}

impl LoadError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source: Arc::new(source),
        }
    }
}
