//! Import pipeline: validate, then normalize.
//!
//! Validation is fail-fast and rejects the whole input on the first bad
//! entry. Normalization never aborts: each entry gets its own outcome.

mod fields;
mod input;
mod normalize;
mod validate;

use std::collections::HashSet;

pub use input::{ImportInput, ValidatedImport, ValidationResult};
pub use normalize::normalize;
pub use validate::{try_validate, validate, validate_with};

use crate::domain::ImportOutcome;
use crate::error::ImportError;
use crate::ports::IdGenerator;
use crate::settings::ImportSettings;

/// Validate `input` and normalize its entries in one step.
///
/// A validation failure yields no outcomes.
pub fn import_servers<'a>(
    input: impl Into<ImportInput<'a>>,
    settings: &ImportSettings,
    existing_names: &HashSet<String>,
    ids: &dyn IdGenerator,
) -> Result<Vec<ImportOutcome>, ImportError> {
    let validated = try_validate(input.into(), settings)?;
    Ok(normalize(&validated.servers, existing_names, ids))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::SequentialIds;

    #[test]
    fn test_import_servers_chains_both_steps() {
        let outcomes = import_servers(
            r#"{"mcpServers": {"git": {"command": "uvx", "args": ["mcp-server-git"]}}}"#,
            &ImportSettings::default(),
            &HashSet::from(["git".to_string()]),
            &SequentialIds::default(),
        )
        .unwrap();

        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].name, "git-2");
    }

    #[test]
    fn test_import_servers_surfaces_validation_error() {
        let err = import_servers(
            "nope",
            &ImportSettings::default(),
            &HashSet::new(),
            &SequentialIds::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ImportError::InvalidJson(_)));
    }
}
