//! Writes the hello-world document to disk.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::clock::{Clock, SystemClock};
use crate::document::HelloDocument;
use crate::error::GenerateError;

/// Creates `hello_world_<YYYYMMDD>_<HHMMSS>.md` files in a target directory.
///
/// The clock is read once per file, so the filename and the
/// "Generated at" line always agree.
#[derive(Debug, Clone)]
pub struct FileGenerator<C> {
    clock: C,
    dir: PathBuf,
}

impl<C: Clock> FileGenerator<C> {
    /// Generator writing into the current working directory.
    ///
    /// The directory is left empty so error paths show the bare filename.
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            dir: PathBuf::new(),
        }
    }

    /// Write into `dir` instead of the current working directory.
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = dir.into();
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Render the document for the current moment and write it out.
    ///
    /// An existing file with the same name is truncated and replaced.
    /// Returns the bare filename.
    pub fn create_hello_world_file(&self) -> Result<String, GenerateError> {
        let doc = HelloDocument::for_timestamp(&self.clock.now());
        let path = self.dir.join(&doc.filename);
        log::debug!("Writing {} bytes to {}", doc.content.len(), path.display());

        write_file(&path, &doc.content).map_err(|e| GenerateError::file_system(&path, e))?;

        Ok(doc.filename)
    }
}

/// Create (or overwrite) a file in the current working directory using the
/// system clock and return its name.
pub fn create_hello_world_file() -> Result<String, GenerateError> {
    FileGenerator::new(SystemClock).create_hello_world_file()
}

/// The handle is closed when `file` goes out of scope, on success or error.
fn write_file(path: &Path, content: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    file.flush()
}

#[cfg(test)]
#[path = "tests/generator_tests.rs"]
mod tests;
