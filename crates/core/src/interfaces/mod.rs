//! Trait seams between the expander and its collaborators

pub mod namespace_registry;

pub use namespace_registry::NamespaceRegistry;
