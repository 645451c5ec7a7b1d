use anyhow::Result;
use std::path::PathBuf;

use crate::utils::registry::load_active_registry;

pub fn list_command(config: Option<PathBuf>, json: bool) -> Result<()> {
    let active = load_active_registry(config)?;
    let table = active.file.into_table();

    if json {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    if table.is_empty() {
        eprintln!("No namespaces defined");
        return Ok(());
    }

    for (name, target) in table.iter() {
        println!("<{name}> -> {target}");
    }
    Ok(())
}
