use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read pattern store {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write pattern store {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
