//! In-memory registry

use crate::{config::NamespaceTable, error::Result, interfaces::NamespaceRegistry};

/// Registry backed by a table built in code
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    table: NamespaceTable,
}

impl StaticRegistry {
    pub fn new(table: NamespaceTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &NamespaceTable {
        &self.table
    }
}

impl From<NamespaceTable> for StaticRegistry {
    fn from(table: NamespaceTable) -> Self {
        Self::new(table)
    }
}

impl NamespaceRegistry for StaticRegistry {
    fn load(&self) -> Result<NamespaceTable> {
        Ok(self.table.clone())
    }
}
