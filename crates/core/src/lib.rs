//! nsalias - expand `<namespace>` aliases in module paths
//!
//! This crate provides functionality to:
//! - Detect a `<name>` token at the start of a module reference
//! - Look the name up in a namespace table supplied by a [`NamespaceRegistry`]
//! - Rewrite the reference into a path relative to the referencing file
//! - Load namespace tables from JSON files, found directly or by discovery
pub mod config;
pub mod error;
pub mod expander;
pub mod interfaces;
pub mod path;
pub mod services;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Error, Result};

// Re-export main API components
pub use config::{NamespaceTable, RegistryFile};
pub use expander::{PathExpander, expand_with_table, has_namespace, parse_token};
pub use interfaces::NamespaceRegistry;
pub use path::Separator;
pub use services::{DiscoveredRegistry, JsonFileRegistry, StaticRegistry};
