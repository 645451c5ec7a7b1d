//! Registry reading a JSON namespace file

use std::path::{Path, PathBuf};

use crate::{
    config::{NamespaceTable, load_from_path},
    error::Result,
    interfaces::NamespaceRegistry,
};

/// Reads the file at a fixed path on every `load`
#[derive(Debug, Clone)]
pub struct JsonFileRegistry {
    path: PathBuf,
}

impl JsonFileRegistry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NamespaceRegistry for JsonFileRegistry {
    fn load(&self) -> Result<NamespaceTable> {
        tracing::trace!("Loading namespace table from {:?}", self.path);
        load_from_path(&self.path).map(|file| file.into_table())
    }
}
