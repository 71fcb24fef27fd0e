//! Rule tree construction errors

use thiserror::Error;

/// Errors that can occur while assembling a rule tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// Two nodes share a name; traces would be ambiguous
    #[error("Duplicate rule name: {0}")]
    DuplicateRuleName(String),

    /// `attach` named a parent that is not in the tree
    #[error("Unknown parent rule: {0}")]
    UnknownParent(String),
}
