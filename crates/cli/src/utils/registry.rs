use anyhow::{Context, Result};
use nsalias_core::{DiscoveredRegistry, RegistryFile, config::load_from_path};
use std::path::{Path, PathBuf};
use tracing::debug;

/// The namespace file a command works against
pub struct ActiveRegistry {
    /// Where the file was found; `None` when discovery came up empty
    pub source: Option<PathBuf>,
    pub file: RegistryFile,
}

/// Load the file named by `--config`, or discover one from the current directory
pub fn load_active_registry(config: Option<PathBuf>) -> Result<ActiveRegistry> {
    match config {
        Some(path) => load_explicit(&path),
        None => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            let registry = DiscoveredRegistry::from_dir(&cwd);
            let source = registry.locate();
            debug!("Discovered namespace file: {:?}", source);

            let file = registry
                .load_file()
                .with_context(|| format!("Failed to load namespaces for {}", cwd.display()))?;
            Ok(ActiveRegistry { source, file })
        }
    }
}

fn load_explicit(path: &Path) -> Result<ActiveRegistry> {
    let file = load_from_path(path)
        .with_context(|| format!("Failed to load namespaces from {}", path.display()))?;
    Ok(ActiveRegistry {
        source: Some(path.to_path_buf()),
        file,
    })
}
