//! Rule conclusions
//!
//! A conclusion is an open map. The conventional keys are typed; anything else a
//! rule wants to report travels in `extra`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Rule confidence assumed when an action does not declare one
pub const DEFAULT_RULE_CONFIDENCE: f64 = 1.0;

/// Rule confidence consumers substitute when a conclusion carries none
pub const UNRESOLVED_RULE_CONFIDENCE: f64 = 0.0;

/// Predicted ligand/nanoparticle binding affinity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Affinity {
    /// Strong binding
    High,
    /// Intermediate binding
    Moderate,
    /// Weak binding
    Low,
    /// Not determined
    Unknown,
}

impl Affinity {
    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Affinity::High => "high",
            Affinity::Moderate => "moderate",
            Affinity::Low => "low",
            Affinity::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Affinity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Predicted order of the surface monolayer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MonolayerOrder {
    /// Stable, structured monolayer
    Stable,
    /// Highly ordered
    Ordered,
    /// Intermediate order
    SemiOrdered,
    /// Partial coverage
    Partial,
    /// Dynamic reorganisation
    Fluid,
    /// Disordered
    Disordered,
    /// At risk of destabilisation
    Unstable,
    /// No monolayer forms
    #[serde(rename = "none")]
    NoLayer,
    /// Not determined
    Unknown,
}

impl MonolayerOrder {
    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            MonolayerOrder::Stable => "stable",
            MonolayerOrder::Ordered => "ordered",
            MonolayerOrder::SemiOrdered => "semi-ordered",
            MonolayerOrder::Partial => "partial",
            MonolayerOrder::Fluid => "fluid",
            MonolayerOrder::Disordered => "disordered",
            MonolayerOrder::Unstable => "unstable",
            MonolayerOrder::NoLayer => "none",
            MonolayerOrder::Unknown => "unknown",
        }
    }
}

impl fmt::Display for MonolayerOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Partial conclusion produced by a rule action
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Conclusion {
    /// Predicted binding affinity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_affinity: Option<Affinity>,

    /// Predicted monolayer order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monolayer_order: Option<MonolayerOrder>,

    /// Confidence the rule declares in itself [0.0, 1.0]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_confidence: Option<f64>,

    /// Any other keys the action reports
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A conclusion with the downstream sentinel defaults applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedConclusion {
    /// Affinity, `Unknown` when absent
    pub affinity: Affinity,
    /// Monolayer order, `Unknown` when absent
    pub monolayer_order: MonolayerOrder,
    /// Rule confidence, `0.0` when absent
    pub rule_confidence: f64,
}

impl Conclusion {
    /// The empty conclusion
    pub fn empty() -> Self {
        Self::default()
    }

    /// Conclusion predicting an affinity and a monolayer order
    pub fn predict(affinity: Affinity, order: MonolayerOrder) -> Self {
        Self {
            predicted_affinity: Some(affinity),
            monolayer_order: Some(order),
            ..Self::default()
        }
    }

    /// Declare the rule's own confidence
    pub fn with_rule_confidence(mut self, confidence: f64) -> Self {
        self.rule_confidence = Some(confidence);
        self
    }

    /// Attach an additional key
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// True when the conclusion carries no keys at all
    pub fn is_empty(&self) -> bool {
        self.predicted_affinity.is_none()
            && self.monolayer_order.is_none()
            && self.rule_confidence.is_none()
            && self.extra.is_empty()
    }

    /// Rule confidence used for scoring (1.0 when undeclared)
    pub fn effective_rule_confidence(&self) -> f64 {
        self.rule_confidence.unwrap_or(DEFAULT_RULE_CONFIDENCE)
    }

    /// Apply the consumer-side defaults for absent fields
    pub fn resolved(&self) -> ResolvedConclusion {
        ResolvedConclusion {
            affinity: self.predicted_affinity.unwrap_or(Affinity::Unknown),
            monolayer_order: self.monolayer_order.unwrap_or(MonolayerOrder::Unknown),
            rule_confidence: self.rule_confidence.unwrap_or(UNRESOLVED_RULE_CONFIDENCE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_conclusion() {
        let conclusion = Conclusion::empty();
        assert!(conclusion.is_empty());
        assert_eq!(serde_json::to_value(&conclusion).unwrap(), json!({}));
    }

    #[test]
    fn test_extra_keys_make_conclusion_non_empty() {
        let conclusion = Conclusion::empty().with_extra("note", "corona");
        assert!(!conclusion.is_empty());
    }

    #[test]
    fn test_wire_names() {
        let conclusion = Conclusion::predict(Affinity::Moderate, MonolayerOrder::SemiOrdered)
            .with_rule_confidence(0.85);
        assert_eq!(
            serde_json::to_value(&conclusion).unwrap(),
            json!({
                "predicted_affinity": "moderate",
                "monolayer_order": "semi-ordered",
                "rule_confidence": 0.85
            })
        );

        let none: MonolayerOrder = serde_json::from_value(json!("none")).unwrap();
        assert_eq!(none, MonolayerOrder::NoLayer);
        assert_eq!(none.as_str(), "none");
    }

    #[test]
    fn test_open_map_round_trip() {
        let value = json!({
            "predicted_affinity": "high",
            "mechanism": "electrostatic"
        });
        let conclusion: Conclusion = serde_json::from_value(value.clone()).unwrap();

        assert_eq!(conclusion.predicted_affinity, Some(Affinity::High));
        assert_eq!(conclusion.extra.get("mechanism"), Some(&json!("electrostatic")));
        assert_eq!(serde_json::to_value(&conclusion).unwrap(), value);
    }

    #[test]
    fn test_rule_confidence_defaults() {
        let conclusion = Conclusion::predict(Affinity::Low, MonolayerOrder::Fluid);
        assert_eq!(conclusion.effective_rule_confidence(), 1.0);
        assert_eq!(conclusion.resolved().rule_confidence, 0.0);
    }

    #[test]
    fn test_resolved_sentinels() {
        let resolved = Conclusion::empty().resolved();
        assert_eq!(resolved.affinity, Affinity::Unknown);
        assert_eq!(resolved.monolayer_order, MonolayerOrder::Unknown);
        assert_eq!(resolved.rule_confidence, 0.0);
    }
}
