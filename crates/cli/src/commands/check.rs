use anyhow::{Result, bail};
use std::path::PathBuf;

use crate::utils::registry::load_active_registry;

pub fn check_command(config: Option<PathBuf>) -> Result<()> {
    let active = load_active_registry(config)?;

    let Some(source) = active.source else {
        bail!("No namespace file found (looked for .nsalias.json and nsalias.json)");
    };

    println!(
        "{}: {} namespaces OK",
        source.display(),
        active.file.namespaces.len()
    );
    Ok(())
}
