//! Namespace registry interface
//!
//! The expander never reads configuration itself. It asks a registry for the
//! table, once per expansion that actually carries a namespace token.

use std::sync::Arc;

use crate::{config::NamespaceTable, error::Result};

/// Source of the namespace table
pub trait NamespaceRegistry: Send + Sync {
    /// Produce the table; failures surface as `Error::RegistryLoad`
    fn load(&self) -> Result<NamespaceTable>;
}

impl NamespaceRegistry for NamespaceTable {
    fn load(&self) -> Result<NamespaceTable> {
        Ok(self.clone())
    }
}

impl<R: NamespaceRegistry + ?Sized> NamespaceRegistry for &R {
    fn load(&self) -> Result<NamespaceTable> {
        (**self).load()
    }
}

impl<R: NamespaceRegistry + ?Sized> NamespaceRegistry for Box<R> {
    fn load(&self) -> Result<NamespaceTable> {
        (**self).load()
    }
}

impl<R: NamespaceRegistry + ?Sized> NamespaceRegistry for Arc<R> {
    fn load(&self) -> Result<NamespaceTable> {
        (**self).load()
    }
}
