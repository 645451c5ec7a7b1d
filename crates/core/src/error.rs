/// Errors that can occur while expanding namespace references
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The reference names a namespace the table does not define.
    #[error("namespace <{0}> is not defined.")]
    UndefinedNamespace(String),

    /// The namespace table could not be produced.
    #[error("Registry load error: {0}")]
    RegistryLoad(String),

    #[error("Absolute caller path is not supported without a project root: {0}")]
    AbsoluteCallerPath(String),

    #[error("Invalid caller path: {0}")]
    InvalidCallerPath(String),

    #[error("Project root must be an absolute path: {0}")]
    InvalidProjectRoot(String),
}

impl Error {
    /// Name of the missing namespace, if this is an undefined-namespace error
    pub fn undefined_namespace(&self) -> Option<&str> {
        match self {
            Error::UndefinedNamespace(name) => Some(name.as_str()),
            _ => None,
        }
    }
}

/// Result type alias for nsalias operations
pub type Result<T> = std::result::Result<T, Error>;
