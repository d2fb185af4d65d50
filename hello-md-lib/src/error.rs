use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while writing the hello-world document.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The target file could not be created or written (permission denied,
    /// disk full, invalid path, ...)
    #[error("Failed to write {}: {source}", path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    pub fn file_system(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Path of the file that failed to be written.
    pub fn path(&self) -> &Path {
        match self {
            Self::FileSystem { path, .. } => path,
        }
    }
}
