//! Prediction records
//!
//! One record is written per evaluated input line:
//!
//! ```json
//! {"index": 1, "context": {...}, "prediction": {...}}
//! ```
//!
//! `prediction` takes one of three shapes: a single evaluation, a multi
//! prediction `{"multi": true, "results": [...]}`, or the empty prediction
//! whose `rule` and `output` are `null`. A failed item also carries `error`.

use nanordr_domain::{Conclusion, Evaluation, Section};
use serde::{Deserialize, Serialize};

/// All conclusions collected for one case, most specific first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiPrediction {
    /// Always `true`; tags the shape on the wire
    pub multi: bool,
    /// The collected evaluations
    pub results: Vec<Evaluation>,
}

/// Placeholder written when there is nothing to report
///
/// `rule` and `output` are always `null` and every score is zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmptyPrediction {
    /// Always `None`
    pub rule: Option<String>,
    /// Always `None`
    pub output: Option<Conclusion>,
    /// Always `0.0`
    pub prediction_confidence: f64,
    /// Always `0.0`
    pub input_confidence: f64,
    /// Always empty
    pub provenance: Vec<String>,
    /// Always `None`
    pub execution_time: Option<f64>,
}

/// The `prediction` field of a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Prediction {
    /// Multi-conclusion mode with at least one result
    Multi(MultiPrediction),
    /// Single-conclusion mode
    Single(Evaluation),
    /// No result, or the item failed
    Empty(EmptyPrediction),
}

impl Prediction {
    /// The empty prediction
    pub fn empty() -> Self {
        Prediction::Empty(EmptyPrediction::default())
    }

    /// Wrap the results of a multi-conclusion evaluation
    ///
    /// An empty list becomes the empty prediction.
    pub fn multi(results: Vec<Evaluation>) -> Self {
        if results.is_empty() {
            return Self::empty();
        }
        Prediction::Multi(MultiPrediction {
            multi: true,
            results,
        })
    }

    /// The most specific evaluation, if any
    pub fn primary(&self) -> Option<&Evaluation> {
        match self {
            Prediction::Single(evaluation) => Some(evaluation),
            Prediction::Multi(multi) => multi.results.first(),
            Prediction::Empty(_) => None,
        }
    }

    /// Every evaluation carried by this prediction
    pub fn evaluations(&self) -> &[Evaluation] {
        match self {
            Prediction::Single(evaluation) => std::slice::from_ref(evaluation),
            Prediction::Multi(multi) => &multi.results,
            Prediction::Empty(_) => &[],
        }
    }

    /// True for the empty prediction
    pub fn is_empty(&self) -> bool {
        matches!(self, Prediction::Empty(_))
    }
}

/// One line of a prediction file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    /// 1-based position of the input among non-blank lines
    pub index: usize,

    /// The case's `context` section, passed through
    #[serde(default)]
    pub context: Section,

    /// What the tree concluded
    pub prediction: Prediction,

    /// Why the item failed, when it did
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PredictionRecord {
    /// Record a successful evaluation
    pub fn new(index: usize, context: Section, prediction: Prediction) -> Self {
        Self {
            index,
            context,
            prediction,
            error: None,
        }
    }

    /// Record a failed item with the empty prediction
    pub fn failed(index: usize, context: Section, error: impl Into<String>) -> Self {
        Self {
            index,
            context,
            prediction: Prediction::empty(),
            error: Some(error.into()),
        }
    }

    /// True when the item failed
    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nanordr_domain::{Affinity, InputCase, MonolayerOrder};
    use serde_json::json;

    fn evaluation(rule: &str) -> Evaluation {
        let output = Conclusion::predict(Affinity::High, MonolayerOrder::Stable).with_rule_confidence(0.95);
        Evaluation::assemble(rule, output, &InputCase::default())
    }

    #[test]
    fn test_empty_prediction_shape() {
        assert_eq!(
            serde_json::to_value(Prediction::empty()).unwrap(),
            json!({
                "rule": null,
                "output": null,
                "prediction_confidence": 0.0,
                "input_confidence": 0.0,
                "provenance": [],
                "execution_time": null
            })
        );
    }

    #[test]
    fn test_multi_prediction_shape() {
        let prediction = Prediction::multi(vec![evaluation("Electrostatic Binding")]);
        let value = serde_json::to_value(&prediction).unwrap();

        assert_eq!(value["multi"], json!(true));
        assert_eq!(value["results"][0]["rule"], json!("Electrostatic Binding"));
        assert_eq!(value["results"][0]["output"]["monolayer_order"], json!("stable"));
    }

    #[test]
    fn test_multi_with_no_results_is_empty() {
        assert!(Prediction::multi(Vec::new()).is_empty());
    }

    #[test]
    fn test_record_shape() {
        let context = Section::new().with("source_code", "C102875");
        let record = PredictionRecord::new(3, context, Prediction::Single(evaluation("Root")));
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["index"], json!(3));
        assert_eq!(value["context"], json!({"source_code": "C102875"}));
        assert_eq!(value["prediction"]["rule"], json!("Root"));
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_failed_record_carries_error() {
        let record = PredictionRecord::failed(2, Section::new(), "rule fault: boom");
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["error"], json!("rule fault: boom"));
        assert_eq!(value["prediction"]["rule"], json!(null));
        assert!(record.is_failed());
    }

    #[test]
    fn test_records_read_back_in_their_shape() {
        let records = [
            PredictionRecord::new(1, Section::new(), Prediction::Single(evaluation("A"))),
            PredictionRecord::new(2, Section::new(), Prediction::multi(vec![evaluation("B"), evaluation("C")])),
            PredictionRecord::failed(3, Section::new(), "invalid input case"),
        ];

        for record in records {
            let line = serde_json::to_string(&record).unwrap();
            let back: PredictionRecord = serde_json::from_str(&line).unwrap();
            assert_eq!(back, record);
        }
    }

    #[test]
    fn test_primary_evaluation() {
        let multi = Prediction::multi(vec![evaluation("B"), evaluation("A")]);
        assert_eq!(multi.primary().map(|e| e.rule.as_str()), Some("B"));
        assert_eq!(multi.evaluations().len(), 2);
        assert!(Prediction::empty().primary().is_none());
    }
}
