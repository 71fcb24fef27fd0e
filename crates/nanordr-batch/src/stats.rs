//! Distribution statistics over a prediction file
//!
//! Counts are taken over each record's primary (most specific) evaluation.
//! Absent conclusion fields count as `unknown`.

use crate::jsonl::{JsonlReader, Line};
use crate::{PredictionRecord, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::Path;
use tracing::warn;

/// Summary of a prediction file
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PredictionStats {
    /// Records read
    pub records: usize,
    /// Records carrying an error
    pub failed: usize,
    /// Records with the empty prediction and no error
    pub empty: usize,
    /// Lines that were not prediction records
    pub unreadable: usize,
    /// Evaluations across all records (multi predictions count each result)
    pub conclusions: usize,
    /// Records per applied rule
    pub rules: BTreeMap<String, usize>,
    /// Records per predicted affinity
    pub affinities: BTreeMap<String, usize>,
    /// Records per predicted monolayer order
    pub monolayer_orders: BTreeMap<String, usize>,
    /// Sum of primary prediction confidences
    pub confidence_total: f64,
}

impl PredictionStats {
    /// Create empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record into the statistics
    pub fn record(&mut self, record: &PredictionRecord) {
        self.records += 1;
        self.conclusions += record.prediction.evaluations().len();

        if record.is_failed() {
            self.failed += 1;
        }

        let Some(evaluation) = record.prediction.primary() else {
            if !record.is_failed() {
                self.empty += 1;
            }
            return;
        };

        let resolved = evaluation.output.resolved();
        *self.rules.entry(evaluation.rule.clone()).or_insert(0) += 1;
        *self
            .affinities
            .entry(resolved.affinity.as_str().to_string())
            .or_insert(0) += 1;
        *self
            .monolayer_orders
            .entry(resolved.monolayer_order.as_str().to_string())
            .or_insert(0) += 1;
        self.confidence_total += evaluation.prediction_confidence;
    }

    /// Read every record from a prediction stream
    pub fn from_reader<R: BufRead>(reader: JsonlReader<R>) -> Result<Self> {
        let mut stats = Self::new();
        for line in reader {
            let Line { index, text } = line?;
            match serde_json::from_str::<PredictionRecord>(&text) {
                Ok(record) => stats.record(&record),
                Err(e) => {
                    warn!("Line {} is not a prediction record: {}", index, e);
                    stats.unreadable += 1;
                }
            }
        }
        Ok(stats)
    }

    /// Read every record from a prediction file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_reader(JsonlReader::open(path)?)
    }

    /// Records that produced at least one evaluation
    pub fn scored(&self) -> usize {
        self.rules.values().sum()
    }

    /// Mean primary prediction confidence (0.0 when nothing was scored)
    pub fn mean_prediction_confidence(&self) -> f64 {
        match self.scored() {
            0 => 0.0,
            n => self.confidence_total / n as f64,
        }
    }

    /// The `n` most applied rules, most frequent first
    pub fn top_rules(&self, n: usize) -> Vec<(&str, usize)> {
        let mut rules: Vec<(&str, usize)> = self
            .rules
            .iter()
            .map(|(rule, count)| (rule.as_str(), *count))
            .collect();
        rules.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        rules.truncate(n);
        rules
    }

    /// `count` as a percentage of all records
    pub fn share(&self, count: usize) -> f64 {
        match self.records {
            0 => 0.0,
            n => count as f64 * 100.0 / n as f64,
        }
    }
}
