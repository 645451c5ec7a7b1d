//! Registry implementations behind the `NamespaceRegistry` trait

pub mod discovered_registry;
pub mod json_file_registry;
pub mod static_registry;

pub use discovered_registry::DiscoveredRegistry;
pub use json_file_registry::JsonFileRegistry;
pub use static_registry::StaticRegistry;
