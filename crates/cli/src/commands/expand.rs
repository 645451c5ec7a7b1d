use anyhow::Result;
use nsalias_core::{PathExpander, Separator};
use std::path::PathBuf;
use tracing::debug;

use crate::utils::registry::load_active_registry;

pub fn expand_command(
    reference: &str,
    from: &str,
    config: Option<PathBuf>,
    root: Option<&str>,
    separator: Option<Separator>,
) -> Result<()> {
    debug!("Expanding {} from {}", reference, from);

    // Plain references never need the namespace file
    if !nsalias_core::has_namespace(reference) {
        let expander = PathExpander::new(nsalias_core::NamespaceTable::new());
        println!("{}", expander.expand(reference, Some(from))?);
        return Ok(());
    }

    let active = load_active_registry(config)?;
    let separator = separator
        .or(active.file.separator)
        .unwrap_or_default();

    let mut expander = PathExpander::new(active.file.into_table()).with_separator(separator);
    if let Some(root) = root {
        expander = expander.with_project_root(root)?;
    }

    println!("{}", expander.expand(reference, Some(from))?);
    Ok(())
}
