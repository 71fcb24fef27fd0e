//! Trait seam between the engine and concrete rules
//!
//! The engine treats every condition/action pair as a black box behind
//! [`RuleLogic`]. Implementations live in `nanordr-engine` (closure-backed
//! logic) and `nanordr-rules` (the standard topology).

use crate::{Conclusion, InputCase, RuleFault};

/// Condition and action of a single rule node
///
/// Both methods receive the case by shared reference and must be free of side
/// effects, so a case can be re-evaluated or walked by several evaluators.
/// `Send + Sync` lets a frozen tree be shared across threads.
pub trait RuleLogic: Send + Sync {
    /// Whether the rule applies to `case`
    fn matches(&self, case: &InputCase) -> Result<bool, RuleFault>;

    /// The (possibly empty) conclusion the rule draws for `case`
    fn act(&self, case: &InputCase) -> Result<Conclusion, RuleFault>;
}
