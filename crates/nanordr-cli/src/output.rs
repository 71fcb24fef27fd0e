//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use nanordr_batch::{BatchMetrics, PredictionStats};
use nanordr_domain::{Affinity, Evaluation};
use nanordr_engine::{RuleNode, RuleTree};
use serde::Serialize;
use serde_json::json;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// One node of the rule tree, flattened for listing.
#[derive(Debug, Clone, Serialize)]
pub struct RuleEntry {
    /// Rule name
    pub name: String,
    /// Domain tag
    pub domain: String,
    /// Distance from `Root`
    pub depth: usize,
    /// Number of direct exceptions
    pub exceptions: usize,
}

/// Flatten a tree, parents before children.
pub fn rule_entries(tree: &RuleTree) -> Vec<RuleEntry> {
    let mut entries = Vec::new();
    push_entries(tree.root(), 0, &mut entries);
    entries
}

fn push_entries(node: &RuleNode, depth: usize, entries: &mut Vec<RuleEntry>) {
    entries.push(RuleEntry {
        name: node.name().to_string(),
        domain: node.domain().to_string(),
        depth,
        exceptions: node.exceptions().len(),
    });
    for exception in node.exceptions() {
        push_entries(exception, depth + 1, entries);
    }
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a single-conclusion result.
    pub fn format_evaluation(&self, evaluation: &Evaluation) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(evaluation)?),
            OutputFormat::Quiet => Ok(evaluation.rule.clone()),
            OutputFormat::Table => {
                let resolved = evaluation.output.resolved();
                let execution_time = evaluation
                    .execution_time
                    .map(|t| format!("{:.6}s", t))
                    .unwrap_or_else(|| "-".to_string());

                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                builder.push_record(["Rule", evaluation.rule.as_str()]);
                builder.push_record(["Affinity", &self.affinity(resolved.affinity)]);
                builder.push_record(["Monolayer order", resolved.monolayer_order.as_str()]);
                builder.push_record(["Rule confidence", &format!("{:.2}", resolved.rule_confidence)]);
                builder.push_record(["Input confidence", &format!("{:.4}", evaluation.input_confidence)]);
                builder.push_record([
                    "Prediction confidence",
                    &format!("{:.4}", evaluation.prediction_confidence),
                ]);
                builder.push_record(["Provenance", &evaluation.provenance.join("\n")]);
                builder.push_record(["Execution time", &execution_time]);

                Ok(self.render(builder))
            }
        }
    }

    /// Format every conclusion of a multi-conclusion evaluation.
    pub fn format_evaluations(&self, evaluations: &[Evaluation]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(evaluations)?),
            OutputFormat::Quiet => Ok(evaluations
                .iter()
                .map(|e| e.rule.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if evaluations.is_empty() {
                    return Ok(self.colorize("No conclusions beyond Root.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["#", "Rule", "Affinity", "Monolayer order", "Rule conf.", "Prediction conf."]);
                for (i, evaluation) in evaluations.iter().enumerate() {
                    let resolved = evaluation.output.resolved();
                    builder.push_record([
                        (i + 1).to_string(),
                        evaluation.rule.clone(),
                        self.affinity(resolved.affinity),
                        resolved.monolayer_order.to_string(),
                        format!("{:.2}", resolved.rule_confidence),
                        format!("{:.4}", evaluation.prediction_confidence),
                    ]);
                }

                Ok(self.render(builder))
            }
        }
    }

    /// Format the rule tree.
    pub fn format_tree(&self, tree: &RuleTree) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&rule_entries(tree))?),
            OutputFormat::Quiet => Ok(tree.rule_names().join("\n")),
            OutputFormat::Table => Ok(tree.explain()),
        }
    }

    /// Format prediction file statistics.
    pub fn format_stats(&self, stats: &PredictionStats, top: usize) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = json!({
                    "records": stats.records,
                    "failed": stats.failed,
                    "empty": stats.empty,
                    "unreadable": stats.unreadable,
                    "conclusions": stats.conclusions,
                    "mean_prediction_confidence": stats.mean_prediction_confidence(),
                    "rules": stats.rules,
                    "affinities": stats.affinities,
                    "monolayer_orders": stats.monolayer_orders,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => Ok(stats
                .top_rules(top)
                .iter()
                .map(|(rule, count)| format!("{}\t{}", count, rule))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if stats.records == 0 {
                    return Ok(self.colorize("No prediction records found.", "yellow"));
                }

                let mut overview = Builder::default();
                overview.push_record(["Records", "Failed", "Empty", "Unreadable", "Conclusions", "Mean confidence"]);
                overview.push_record([
                    stats.records.to_string(),
                    stats.failed.to_string(),
                    stats.empty.to_string(),
                    stats.unreadable.to_string(),
                    stats.conclusions.to_string(),
                    format!("{:.4}", stats.mean_prediction_confidence()),
                ]);

                let mut rules = Builder::default();
                rules.push_record(["Rule", "Count", "Share"]);
                for (rule, count) in stats.top_rules(top) {
                    rules.push_record([
                        rule.to_string(),
                        count.to_string(),
                        format!("{:.1}%", stats.share(count)),
                    ]);
                }

                let mut affinities = Builder::default();
                affinities.push_record(["Affinity", "Count"]);
                for (affinity, count) in &stats.affinities {
                    affinities.push_record([affinity.clone(), count.to_string()]);
                }

                let mut orders = Builder::default();
                orders.push_record(["Monolayer order", "Count"]);
                for (order, count) in &stats.monolayer_orders {
                    orders.push_record([order.clone(), count.to_string()]);
                }

                Ok([
                    self.render(overview),
                    self.render(rules),
                    self.render(affinities),
                    self.render(orders),
                ]
                .join("\n\n"))
            }
        }
    }

    /// Format the metrics of a batch run.
    pub fn format_metrics(&self, metrics: &BatchMetrics) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = json!({
                    "processed": metrics.processed(),
                    "written": metrics.written,
                    "resolved": metrics.resolved,
                    "unresolved": metrics.unresolved,
                    "faulted": metrics.faulted,
                    "malformed": metrics.malformed,
                    "skipped": metrics.skipped,
                    "elapsed_secs": metrics.elapsed_secs,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => Ok(metrics.written.to_string()),
            OutputFormat::Table => Ok(metrics.summary()),
        }
    }

    /// True when the output is meant for machines.
    pub fn is_plain(&self) -> bool {
        !matches!(self.format, OutputFormat::Table)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn affinity(&self, affinity: Affinity) -> String {
        let color = match affinity {
            Affinity::High => "green",
            Affinity::Moderate => "yellow",
            Affinity::Low => "red",
            Affinity::Unknown => "none",
        };
        self.colorize(affinity.as_str(), color)
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nanordr_batch::{Prediction, PredictionRecord};
    use nanordr_domain::{Conclusion, InputCase, MonolayerOrder, Section};

    fn evaluation() -> Evaluation {
        let case = InputCase {
            nanoparticle: Section::new().with_attribute("type", "metallic", 0.8, "keywords"),
            ..InputCase::default()
        };
        let output = Conclusion::predict(Affinity::High, MonolayerOrder::Ordered).with_rule_confidence(0.9);
        Evaluation::assemble("Metallic Surface Adsorption", output, &case)
    }

    #[test]
    fn test_json_evaluation() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_evaluation(&evaluation()).unwrap();
        assert!(output.contains("\"predicted_affinity\": \"high\""));
        assert!(output.contains("\"provenance\""));
    }

    #[test]
    fn test_quiet_evaluation() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_evaluation(&evaluation()).unwrap();
        assert_eq!(output, "Metallic Surface Adsorption");
    }

    #[test]
    fn test_table_evaluation() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_evaluation(&evaluation()).unwrap();
        assert!(output.contains("Prediction confidence"));
        assert!(output.contains("0.7200"));
        assert!(output.contains("nanoparticle.type_provenance:keywords"));
    }

    #[test]
    fn test_empty_evaluations() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_evaluations(&[]).unwrap();
        assert!(output.contains("No conclusions beyond Root"));
    }

    #[test]
    fn test_tree_formats() {
        let tree = nanordr_rules::standard_tree().unwrap();

        let table = Formatter::new(OutputFormat::Table, false).format_tree(&tree).unwrap();
        assert!(table.starts_with("Rule: Root (domain=general)"));

        let quiet = Formatter::new(OutputFormat::Quiet, false).format_tree(&tree).unwrap();
        assert_eq!(quiet.lines().count(), tree.rule_count());

        let entries = rule_entries(&tree);
        assert_eq!(entries[0].depth, 0);
        assert_eq!(entries[0].exceptions, 5);
        assert_eq!(entries[1].depth, 1);
    }

    #[test]
    fn test_stats_table() {
        let mut stats = PredictionStats::new();
        stats.record(&PredictionRecord::new(1, Section::new(), Prediction::Single(evaluation())));

        let output = Formatter::new(OutputFormat::Table, false)
            .format_stats(&stats, 5)
            .unwrap();
        assert!(output.contains("Metallic Surface Adsorption"));
        assert!(output.contains("100.0%"));
        assert!(output.contains("ordered"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.warning("test"), "⚠ test");
    }
}
