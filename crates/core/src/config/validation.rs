//! Namespace table validation, applied whenever a table is loaded from disk

use super::NamespaceTable;
use crate::{
    error::{Error, Result},
    expander::token::is_valid_name,
};

/// Trait for validating namespace tables
pub trait TableValidator {
    fn validate(&self, table: &NamespaceTable) -> Result<()>;
}

/// Checks names against the token charset and rejects empty targets
#[derive(Debug, Default, Clone, Copy)]
pub struct NamespaceTableValidator;

impl NamespaceTableValidator {
    pub fn new() -> Self {
        Self
    }

    /// Collect every problem instead of stopping at the first
    pub fn problems(&self, table: &NamespaceTable) -> Vec<String> {
        let mut problems = Vec::new();

        for (name, target) in table.iter() {
            if !is_valid_name(name) {
                problems.push(format!("invalid namespace name '{name}'"));
            }
            if target.trim().is_empty() {
                problems.push(format!("namespace <{name}> has an empty target"));
            }
        }

        problems
    }
}

impl TableValidator for NamespaceTableValidator {
    fn validate(&self, table: &NamespaceTable) -> Result<()> {
        let problems = self.problems(table);
        if problems.is_empty() {
            Ok(())
        } else {
            Err(Error::RegistryLoad(problems.join("; ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_table_passes() {
        let table = NamespaceTable::new()
            .with_namespace("foo", "./bar")
            .with_namespace("@ui", "../ui/src");
        assert!(NamespaceTableValidator::new().validate(&table).is_ok());
    }

    #[test]
    fn test_reports_all_problems() {
        let table = NamespaceTable::new()
            .with_namespace("bad name", "./x")
            .with_namespace("empty", "  ");

        let validator = NamespaceTableValidator::new();
        assert_eq!(validator.problems(&table).len(), 2);

        let err = validator.validate(&table).unwrap_err();
        assert!(matches!(err, Error::RegistryLoad(_)));
        let message = err.to_string();
        assert!(message.contains("invalid namespace name 'bad name'"));
        assert!(message.contains("namespace <empty> has an empty target"));
    }
}
