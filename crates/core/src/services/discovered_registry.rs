//! Registry that locates its namespace file by walking up the directory tree

use std::path::{Path, PathBuf};

use crate::{
    config::{NamespaceTable, RegistryFile, find_config_file, load_from_path, loader::env_override},
    error::Result,
    interfaces::NamespaceRegistry,
};

/// Finds `.nsalias.json` / `nsalias.json` at or above a start directory.
///
/// `NSALIAS_CONFIG` overrides discovery when it is set at construction time.
/// Nothing found means an empty table.
#[derive(Debug, Clone)]
pub struct DiscoveredRegistry {
    start: PathBuf,
    override_path: Option<PathBuf>,
}

impl DiscoveredRegistry {
    pub fn from_dir(start: impl Into<PathBuf>) -> Self {
        Self {
            start: start.into(),
            override_path: env_override(),
        }
    }

    /// Replace the environment override; `None` forces discovery
    pub fn with_override(mut self, path: Option<PathBuf>) -> Self {
        self.override_path = path;
        self
    }

    pub fn start(&self) -> &Path {
        &self.start
    }

    /// The file `load` would read, if any
    pub fn locate(&self) -> Option<PathBuf> {
        match &self.override_path {
            Some(path) => Some(path.clone()),
            None => find_config_file(&self.start),
        }
    }

    /// Load the whole file, including the separator preference
    pub fn load_file(&self) -> Result<RegistryFile> {
        match self.locate() {
            Some(path) => load_from_path(&path),
            None => Ok(RegistryFile::default()),
        }
    }
}

impl NamespaceRegistry for DiscoveredRegistry {
    fn load(&self) -> Result<NamespaceTable> {
        self.load_file().map(|file| file.into_table())
    }
}
