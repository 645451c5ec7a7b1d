//! Namespace table and the file shape it is read from

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::path::Separator;

/// Mapping from namespace name to its registered target path
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceTable {
    #[serde(default)]
    pub namespaces: BTreeMap<String, String>,
}

impl NamespaceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a namespace
    pub fn with_namespace(mut self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.insert(name, target);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, target: impl Into<String>) {
        self.namespaces.insert(name.into(), target.into());
    }

    /// Target path registered for `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.namespaces.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.namespaces.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }

    /// Namespaces in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.namespaces
            .iter()
            .map(|(name, target)| (name.as_str(), target.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for NamespaceTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            namespaces: iter
                .into_iter()
                .map(|(name, target)| (name.into(), target.into()))
                .collect(),
        }
    }
}

/// On-disk namespace configuration
///
/// ```json
/// {
///   "namespaces": { "shared": "../shared/lib" },
///   "separator": "slash"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryFile {
    #[serde(default)]
    pub namespaces: BTreeMap<String, String>,

    /// Output separator preference; callers fall back to the default when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<Separator>,
}

impl RegistryFile {
    pub fn table(&self) -> NamespaceTable {
        NamespaceTable {
            namespaces: self.namespaces.clone(),
        }
    }

    pub fn into_table(self) -> NamespaceTable {
        NamespaceTable {
            namespaces: self.namespaces,
        }
    }
}
