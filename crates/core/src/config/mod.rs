//! Namespace configuration: the table, its file shape, loading and validation

pub mod loader;
mod table;
pub mod validation;

pub use loader::{
    CONFIG_ENV_VAR, CONFIG_FILE_NAMES, find_config_file, find_config_file_from, load_from_path,
};
pub use table::{NamespaceTable, RegistryFile};
pub use validation::{NamespaceTableValidator, TableValidator};
