//! Namespace expansion
//!
//! Turns `<name>/rest` into a path relative to the caller's directory:
//! one `..` per directory between the caller and the project root, one more
//! per leading `..` of the namespace target, then the target's own segments
//! and finally `rest`.

pub mod token;

use tracing::{debug, trace};

use crate::{
    config::NamespaceTable,
    error::{Error, Result},
    interfaces::NamespaceRegistry,
    path::{SegmentPath, Separator},
};

pub use token::{NamespaceToken, has_namespace, is_valid_name, parse_token};

/// Caller path assumed when none is given
pub const DEFAULT_CALLER: &str = ".";

/// Expands namespace references against the table supplied by `R`
#[derive(Debug, Clone)]
pub struct PathExpander<R> {
    registry: R,
    separator: Separator,
    project_root: Option<SegmentPath>,
}

impl<R: NamespaceRegistry> PathExpander<R> {
    pub fn new(registry: R) -> Self {
        Self {
            registry,
            separator: Separator::default(),
            project_root: None,
        }
    }

    /// Render output with `separator` instead of the default backslash
    pub fn with_separator(mut self, separator: Separator) -> Self {
        self.separator = separator;
        self
    }

    /// Accept absolute caller paths that lie under `root`.
    ///
    /// Without a project root, absolute callers are rejected. `root` must
    /// itself be absolute, since only absolute callers are matched against it.
    pub fn with_project_root(mut self, root: &str) -> Result<Self> {
        let parsed = SegmentPath::parse(root);
        if !parsed.is_absolute() {
            return Err(Error::InvalidProjectRoot(root.to_string()));
        }
        self.project_root = Some(parsed);
        Ok(self)
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn separator(&self) -> Separator {
        self.separator
    }

    /// Expand `reference` as written in the file at `caller` (`.` when `None`).
    ///
    /// References without a namespace token come back unchanged and never
    /// touch the registry.
    pub fn expand(&self, reference: &str, caller: Option<&str>) -> Result<String> {
        let Some(token) = parse_token(reference) else {
            return Ok(passthrough(reference));
        };

        trace!("Loading namespace table for <{}>", token.name);
        let table = self.registry.load()?;
        self.expand_token(&table, token, caller)
    }

    /// Like [`expand`](Self::expand) but against a table the caller already holds
    pub fn expand_against(
        &self,
        table: &NamespaceTable,
        reference: &str,
        caller: Option<&str>,
    ) -> Result<String> {
        match parse_token(reference) {
            Some(token) => self.expand_token(table, token, caller),
            None => Ok(passthrough(reference)),
        }
    }

    fn expand_token(
        &self,
        table: &NamespaceTable,
        token: NamespaceToken<'_>,
        caller: Option<&str>,
    ) -> Result<String> {
        let target = table
            .get(token.name)
            .ok_or_else(|| Error::UndefinedNamespace(token.name.to_string()))?;

        let target = SegmentPath::parse(target);
        let remainder = SegmentPath::parse_relative(token.remainder);

        let resolved = if target.is_absolute() {
            target.join(&remainder)
        } else {
            let depth = self.caller_depth(caller.unwrap_or(DEFAULT_CALLER))?;
            target.with_extra_ups(depth).join(&remainder)
        };

        let expanded = resolved.render(self.separator);
        debug!(
            "Expanded <{}>{} from {:?} to {}",
            token.name,
            token.remainder,
            caller.unwrap_or(DEFAULT_CALLER),
            expanded
        );
        Ok(expanded)
    }

    /// Directories between the project root and the caller's directory
    fn caller_depth(&self, caller: &str) -> Result<usize> {
        let parsed = SegmentPath::parse(caller);

        let relative = if parsed.is_absolute() {
            self.project_root
                .as_ref()
                .and_then(|root| parsed.strip_prefix(root))
                .ok_or_else(|| Error::AbsoluteCallerPath(caller.to_string()))?
        } else {
            parsed
        };

        if relative.ups() > 0 {
            return Err(Error::InvalidCallerPath(format!(
                "{caller} points outside the project root"
            )));
        }

        Ok(relative.into_directory().segments().len())
    }
}

/// Expand `reference` against a pre-resolved table with default settings
pub fn expand_with_table(
    table: &NamespaceTable,
    reference: &str,
    caller: Option<&str>,
) -> Result<String> {
    PathExpander::new(table).expand_against(table, reference, caller)
}

// A bare `.` is the one input rewritten on the passthrough branch, so the
// result always reads as an explicit relative directory.
fn passthrough(reference: &str) -> String {
    if reference == "." {
        "./".to_string()
    } else {
        reference.to_string()
    }
}
