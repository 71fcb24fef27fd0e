//! Evaluation results

use crate::{aggregate_input_confidence, Conclusion, InputCase};
use serde::{Deserialize, Serialize};

/// Result of resolving an input case against a rule tree
///
/// Invariant: `prediction_confidence == input_confidence * rule_confidence`,
/// where the rule confidence defaults to 1.0 when the action declared none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Name of the rule that produced the conclusion
    pub rule: String,

    /// The conclusion itself
    pub output: Conclusion,

    /// Blended confidence in the prediction
    pub prediction_confidence: f64,

    /// Aggregated trust in the case's inferred fields
    pub input_confidence: f64,

    /// De-duplicated provenance of the scanned fields
    pub provenance: Vec<String>,

    /// Wall-clock seconds of the top-level call, when measured
    pub execution_time: Option<f64>,
}

impl Evaluation {
    /// Score `output` against `case` on behalf of `rule`
    ///
    /// This is the single place where input and rule confidence are blended.
    pub fn assemble(rule: impl Into<String>, output: Conclusion, case: &InputCase) -> Self {
        let input = aggregate_input_confidence(case);
        let rule_confidence = output.effective_rule_confidence();

        Self {
            rule: rule.into(),
            prediction_confidence: input.score * rule_confidence,
            input_confidence: input.score,
            provenance: input.provenance.into_vec(),
            output,
            execution_time: None,
        }
    }

    /// Rule confidence used when scoring (1.0 when undeclared)
    pub fn rule_confidence(&self) -> f64 {
        self.output.effective_rule_confidence()
    }

    /// Record the duration of the call that produced this result
    pub fn with_execution_time(mut self, seconds: f64) -> Self {
        self.execution_time = Some(seconds);
        self
    }

    /// Copy without the diagnostic timing, for comparisons
    pub fn without_timing(&self) -> Self {
        Self {
            execution_time: None,
            ..self.clone()
        }
    }
}
