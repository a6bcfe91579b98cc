use std::path::PathBuf;

use thiserror::Error;

/// Main error type for docsmith operations
#[derive(Error, Debug)]
pub enum DocsmithError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Could not read input file {path}: {source}")]
    Input {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not write artifact {path}: {source}")]
    Artifact {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, DocsmithError>;
