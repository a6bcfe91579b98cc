use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DocsmithError, Result};

/// One input file captured for prompt construction.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path as given on the command line
    pub path: PathBuf,

    /// Full text content of the file
    pub content: String,
}

/// Ordered collection of input files, rendered into the single labeled
/// text blob that accompanies the documentation request.
#[derive(Debug, Clone)]
pub struct InputBundle {
    files: Vec<SourceFile>,
}

impl InputBundle {
    /// Read every path into memory, in order. A missing or non-UTF-8 file
    /// fails the whole bundle; there is no partial-success mode.
    pub fn from_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut files = Vec::with_capacity(paths.len());

        for path in paths {
            let path = path.as_ref();
            let content = fs::read_to_string(path).map_err(|source| DocsmithError::Input {
                path: path.to_path_buf(),
                source,
            })?;

            files.push(SourceFile {
                path: path.to_path_buf(),
                content,
            });
        }

        Ok(Self { files })
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Render the combined blob: one labeled block per file, in input order.
    pub fn combined(&self) -> String {
        let mut blob = String::new();

        for file in &self.files {
            blob.push_str(&format!(
                "Path:\n{} Content:\n{} \n",
                file.path.display(),
                file.content
            ));
        }

        blob
    }
}
