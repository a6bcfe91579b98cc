use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{DocsmithError, Result};

/// Writes generated artifacts under a single output directory.
///
/// Errors are returned to the caller rather than handled here; the engine
/// decides whether a failed write aborts anything.
pub struct ArtifactWriter {
    root: PathBuf,
}

impl ArtifactWriter {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write `content` as the full contents of `{root}/{file_name}`,
    /// creating missing directories and overwriting any existing file.
    pub fn write(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.root).map_err(|source| DocsmithError::Artifact {
            path: self.root.clone(),
            source,
        })?;

        let path = self.root.join(file_name);
        fs::write(&path, content).map_err(|source| DocsmithError::Artifact {
            path: path.clone(),
            source,
        })?;

        info!("File '{}' written to '{}'", file_name, self.root.display());
        Ok(path)
    }
}
