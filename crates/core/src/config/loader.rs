//! Namespace file loading and discovery

use std::path::{Path, PathBuf};

use super::{NamespaceTableValidator, RegistryFile, TableValidator};
use crate::error::{Error, Result};

/// File names searched for in each directory, in priority order
pub const CONFIG_FILE_NAMES: [&str; 2] = [".nsalias.json", "nsalias.json"];

/// Environment variable that points at a namespace file and bypasses discovery
pub const CONFIG_ENV_VAR: &str = "NSALIAS_CONFIG";

/// Load and validate a namespace file
pub fn load_from_path(path: &Path) -> Result<RegistryFile> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::RegistryLoad(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let file: RegistryFile = serde_json::from_str(&content).map_err(|e| {
        Error::RegistryLoad(format!("Failed to parse {}: {}", path.display(), e))
    })?;

    NamespaceTableValidator::new().validate(&file.table())?;

    tracing::debug!(
        "Loaded {} namespaces from {:?}",
        file.namespaces.len(),
        path
    );
    Ok(file)
}

/// Find a namespace file in `start` or any of its parent directories.
///
/// A relative `start` is taken relative to the current directory.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let base = std::env::current_dir().ok()?;
    find_config_file_from(start, &base)
}

/// Like [`find_config_file`], resolving a relative `start` against `base`
pub fn find_config_file_from(start: &Path, base: &Path) -> Option<PathBuf> {
    let start = if start.is_absolute() {
        start.to_path_buf()
    } else {
        base.join(start).components().collect()
    };

    let mut current_dir = if start.is_file() {
        start.parent()?.to_path_buf()
    } else {
        start.clone()
    };

    loop {
        for name in CONFIG_FILE_NAMES {
            let candidate = current_dir.join(name);
            if candidate.is_file() {
                tracing::debug!("Found namespace file at: {:?}", candidate);
                return Some(candidate);
            }
        }

        // Move to parent directory
        if !current_dir.pop() {
            break;
        }
    }

    tracing::debug!("No namespace file found above {:?}", start);
    None
}

/// Path named by the override environment variable, if set and non-empty
pub fn env_override() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
