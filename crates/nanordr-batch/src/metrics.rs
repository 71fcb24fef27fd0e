//! Counters collected during a batch run

use nanordr_engine::ROOT_NAME;
use std::collections::HashMap;

/// Metrics collected during a batch run
#[derive(Debug, Clone, Default)]
pub struct BatchMetrics {
    /// Records written
    pub written: usize,

    /// Items resolved below `Root`
    pub resolved: usize,

    /// Items with no conclusion beyond `Root`
    pub unresolved: usize,

    /// Items whose rules raised a fault
    pub faulted: usize,

    /// Lines that did not parse as an input case
    pub malformed: usize,

    /// Malformed lines dropped without a record
    pub skipped: usize,

    /// Items per applied rule (primary conclusion)
    pub rules: HashMap<String, usize>,

    /// Wall-clock seconds for the run
    pub elapsed_secs: f64,
}

impl BatchMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an item evaluated without fault
    pub fn record_success(&mut self, rule: Option<&str>) {
        self.written += 1;
        match rule {
            Some(rule) if rule != ROOT_NAME => {
                self.resolved += 1;
                *self.rules.entry(rule.to_string()).or_insert(0) += 1;
            }
            _ => self.unresolved += 1,
        }
    }

    /// Record an item whose rules raised a fault
    pub fn record_fault(&mut self) {
        self.written += 1;
        self.faulted += 1;
    }

    /// Record a line that did not parse
    pub fn record_malformed(&mut self, skipped: bool) {
        self.malformed += 1;
        if skipped {
            self.skipped += 1;
        } else {
            self.written += 1;
        }
    }

    /// Lines consumed from the input
    pub fn processed(&self) -> usize {
        self.resolved + self.unresolved + self.faulted + self.malformed
    }

    /// Items that failed for any reason
    pub fn failed(&self) -> usize {
        self.faulted + self.malformed
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Batch Metrics Summary".to_string(),
            "=====================".to_string(),
            format!("Processed: {}", self.processed()),
            format!("Written: {}", self.written),
            format!("Resolved: {}", self.resolved),
            format!("Unresolved: {}", self.unresolved),
            format!("Faulted: {}", self.faulted),
            format!("Malformed: {} ({} skipped)", self.malformed, self.skipped),
            format!("Elapsed: {:.3}s", self.elapsed_secs),
        ];

        if !self.rules.is_empty() {
            let mut rules: Vec<(&String, &usize)> = self.rules.iter().collect();
            rules.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

            lines.push(String::new());
            lines.push("Applied rules:".to_string());
            for (rule, count) in rules {
                lines.push(format!("  {}: {}", rule, count));
            }
        }

        lines.join("\n")
    }
}
