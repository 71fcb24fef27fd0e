//! Input confidence aggregation
//!
//! Computes how much to trust the upstream-derived facts a rule consumed. The
//! same function serves both evaluators, so their confidence arithmetic cannot
//! drift apart.
//!
//! The model:
//! 1. Scan the `nanoparticle`, `ligand` and `biomolecule` sections (surface and
//!    context are not part of the model)
//! 2. Average every numeric `*_confidence` field (0.0 when there are none)
//! 3. Record every non-empty `*_provenance` field as `"{section}.{field}:{value}"`

use crate::case::{CONFIDENCE_SUFFIX, PROVENANCE_SUFFIX};
use crate::{InputCase, ProvenanceTrail, SectionKind};
use serde_json::Value;

/// Sections that feed the confidence model, in scan order
pub const SCANNED_SECTIONS: [SectionKind; 3] = [
    SectionKind::Nanoparticle,
    SectionKind::Ligand,
    SectionKind::Biomolecule,
];

/// Aggregated trust in an input case
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputConfidence {
    /// Mean of the collected field confidences
    pub score: f64,
    /// Where the scanned fields came from
    pub provenance: ProvenanceTrail,
}

/// Aggregate field-level confidence annotations of `case`
///
/// Non-numeric confidence values are skipped silently; empty sections simply
/// contribute nothing.
pub fn aggregate_input_confidence(case: &InputCase) -> InputConfidence {
    let mut confidences = Vec::new();
    let mut provenance = ProvenanceTrail::new();

    for kind in SCANNED_SECTIONS {
        for (key, value) in case.section(kind).iter() {
            if key.ends_with(CONFIDENCE_SUFFIX) {
                if let Some(confidence) = numeric(value) {
                    confidences.push(confidence);
                }
            }
            if key.ends_with(PROVENANCE_SUFFIX) {
                if let Some(label) = provenance_label(value) {
                    provenance.record(format!("{}.{}:{}", kind, key, label));
                }
            }
        }
    }

    InputConfidence {
        score: mean(&confidences),
        provenance,
    }
}

// Only JSON numbers count; a boolean `true` is not read as 1.0
fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Render a provenance value, or `None` when it is empty
fn provenance_label(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Array(items) if items.is_empty() => None,
        Value::Object(fields) if fields.is_empty() => None,
        other => Some(other.to_string()),
    }
}
