//! Rule fault types

use thiserror::Error;

/// Fault raised by a rule's condition or action
///
/// The engine never recovers from a fault: it propagates to whoever asked for
/// the evaluation. Batch drivers isolate faults per item.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuleFault {
    /// A field the rule requires is absent
    #[error("Missing field: {section}.{field}")]
    MissingField {
        /// Section name
        section: String,
        /// Field name
        field: String,
    },

    /// A field holds a value the rule cannot interpret
    #[error("Invalid value for {section}.{field}: {reason}")]
    InvalidValue {
        /// Section name
        section: String,
        /// Field name
        field: String,
        /// What was wrong with it
        reason: String,
    },

    /// Any other authoring error inside a rule
    #[error("Rule logic error: {0}")]
    Logic(String),
}
