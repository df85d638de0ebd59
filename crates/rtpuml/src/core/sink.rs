//! Persistence of finished documents
//!
//! A location is the list of name segments pushed by the scope tracker,
//! e.g. `["App", "control", "Top"]`. The filesystem sink maps it to nested
//! directories below its root; the memory sink keeps everything in ordered
//! maps for tests and embedding.

use super::{GeneratorError, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Destination for generated documents
pub trait DocumentSink {
    /// Make sure `location` exists, creating it if needed
    fn create_location(&mut self, location: &[String]) -> Result<()>;

    /// Store one complete document at `location`
    fn write_document(&mut self, location: &[String], file_name: &str, contents: &str)
        -> Result<()>;
}

/// Writes documents below a root directory
#[derive(Debug, Clone)]
pub struct FileSink {
    root: PathBuf,
}

impl FileSink {
    /// Create the root directory (and parents) if absent
    ///
    /// # Errors
    /// Returns [`GeneratorError::Configuration`] if the root cannot be
    /// created, is not a directory, or does not accept new files.
    pub fn create(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| GeneratorError::configuration(&root, e))?;
        if !root.is_dir() {
            return Err(GeneratorError::configuration(
                &root,
                std::io::Error::new(std::io::ErrorKind::Other, "not a directory"),
            ));
        }
        // Dropped immediately, which removes the file again
        tempfile::NamedTempFile::new_in(&root)
            .map_err(|e| GeneratorError::configuration(&root, e))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_of(&self, location: &[String]) -> PathBuf {
        location
            .iter()
            .fold(self.root.clone(), |path, segment| path.join(segment))
    }
}

impl DocumentSink for FileSink {
    fn create_location(&mut self, location: &[String]) -> Result<()> {
        let dir = self.path_of(location);
        fs::create_dir_all(&dir).map_err(|e| GeneratorError::configuration(&dir, e))
    }

    fn write_document(
        &mut self,
        location: &[String],
        file_name: &str,
        contents: &str,
    ) -> Result<()> {
        let path = self.path_of(location).join(file_name);
        fs::write(&path, contents)?;
        debug!(path = %path.display(), bytes = contents.len(), "Wrote document");
        Ok(())
    }
}

/// Keeps documents in memory, keyed by `segment/.../file_name`
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    locations: BTreeSet<String>,
    documents: BTreeMap<String, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(location: &[String], file_name: &str) -> String {
        let mut parts: Vec<&str> = location.iter().map(String::as_str).collect();
        parts.push(file_name);
        parts.join("/")
    }

    /// Document stored under `path` (e.g. `"App/Top/composition.puml"`)
    pub fn get(&self, path: &str) -> Option<&str> {
        self.documents.get(path).map(String::as_str)
    }

    /// All document paths in sorted order
    pub fn paths(&self) -> Vec<&str> {
        self.documents.keys().map(String::as_str).collect()
    }

    pub fn documents(&self) -> &BTreeMap<String, String> {
        &self.documents
    }

    /// Every location created so far, joined with `/`
    pub fn locations(&self) -> Vec<&str> {
        self.locations.iter().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentSink for MemorySink {
    fn create_location(&mut self, location: &[String]) -> Result<()> {
        self.locations.insert(location.join("/"));
        Ok(())
    }

    fn write_document(
        &mut self,
        location: &[String],
        file_name: &str,
        contents: &str,
    ) -> Result<()> {
        self.documents
            .insert(Self::key(location, file_name), contents.to_string());
        Ok(())
    }
}
