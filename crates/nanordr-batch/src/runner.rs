//! Batch evaluation of JSONL input files

use crate::jsonl::{JsonlReader, JsonlWriter, Line};
use crate::{BatchConfig, BatchMetrics, EvaluationMode, Prediction, PredictionRecord, Result};
use nanordr_domain::{InputCase, RuleFault, Section};
use nanordr_engine::RuleTree;
use std::io::{BufRead, Write};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Applies a frozen rule tree to a stream of input cases
///
/// Each item is isolated: a malformed line or a faulting rule produces a
/// failed record (or is skipped) and the run continues. Only I/O and output
/// encoding errors abort the batch.
pub struct BatchRunner<'t> {
    tree: &'t RuleTree,
    config: BatchConfig,
}

impl<'t> BatchRunner<'t> {
    /// Create a runner over `tree`
    pub fn new(tree: &'t RuleTree, config: BatchConfig) -> Self {
        Self { tree, config }
    }

    /// Active configuration
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Evaluate one case according to the configured mode
    pub fn predict(&self, case: &InputCase) -> std::result::Result<Prediction, RuleFault> {
        match self.config.mode {
            EvaluationMode::Single => Ok(Prediction::Single(self.tree.evaluate(case)?)),
            EvaluationMode::All => Ok(Prediction::multi(self.tree.evaluate_all(case)?)),
        }
    }

    /// Evaluate one case into a record, isolating rule faults
    pub fn record(&self, index: usize, case: &InputCase) -> PredictionRecord {
        let context = case.context.clone();
        match self.predict(case) {
            Ok(prediction) => PredictionRecord::new(index, context, prediction),
            Err(fault) => {
                warn!("Case {} raised a rule fault: {}", index, fault);
                PredictionRecord::failed(index, context, format!("rule fault: {}", fault))
            }
        }
    }

    /// Evaluate every line of `reader` and write a record per item
    pub fn run<R, W>(&self, reader: JsonlReader<R>, writer: &mut JsonlWriter<W>) -> Result<BatchMetrics>
    where
        R: BufRead,
        W: Write,
    {
        self.config.validate()?;
        let start = Instant::now();
        let mut metrics = BatchMetrics::new();

        for line in reader {
            let Line { index, text } = line?;
            if self.config.limit.is_some_and(|limit| index > limit) {
                break;
            }

            let case: InputCase = match serde_json::from_str(&text) {
                Ok(case) => case,
                Err(e) => {
                    let skip = self.config.skip_invalid_lines;
                    warn!("Line {} is not a valid input case: {}", index, e);
                    metrics.record_malformed(skip);
                    if !skip {
                        let record = PredictionRecord::failed(
                            index,
                            Section::new(),
                            format!("invalid input case: {}", e),
                        );
                        writer.write(&record)?;
                    }
                    continue;
                }
            };

            let record = self.record(index, &case);
            if record.is_failed() {
                metrics.record_fault();
            } else {
                let rule = record.prediction.primary().map(|e| e.rule.as_str());
                debug!(
                    "Case {} ({}) resolved by {:?}",
                    index,
                    case.display_name().as_str().unwrap_or("-"),
                    rule
                );
                metrics.record_success(rule);
            }
            writer.write(&record)?;
        }

        writer.flush()?;
        metrics.elapsed_secs = start.elapsed().as_secs_f64();
        info!(
            "Batch complete: {} processed, {} resolved, {} failed in {:.3}s",
            metrics.processed(),
            metrics.resolved,
            metrics.failed(),
            metrics.elapsed_secs
        );
        Ok(metrics)
    }

    /// Evaluate the JSONL file at `input` into a prediction file at `output`
    pub fn run_files(&self, input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<BatchMetrics> {
        let input = input.as_ref();
        let output = output.as_ref();
        info!(
            "Evaluating {} into {} (mode={}, limit={:?})",
            input.display(),
            output.display(),
            self.config.mode,
            self.config.limit
        );

        let reader = JsonlReader::open(input)?;
        let mut writer = JsonlWriter::create(output)?;
        self.run(reader, &mut writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nanordr_domain::{Affinity, Conclusion, MonolayerOrder};
    use nanordr_engine::{RuleNode, RuleTreeBuilder, TryFnLogic};
    use std::io::Cursor;

    fn tree() -> RuleTree {
        let mut builder = RuleTreeBuilder::new();
        builder
            .attach_to_root(RuleNode::from_fns(
                "Metallic",
                "nanoparticle",
                |case| case.nanoparticle.text("type").is("metallic"),
                |_| Conclusion::predict(Affinity::High, MonolayerOrder::Ordered).with_rule_confidence(0.9),
            ))
            .unwrap();
        builder
            .attach_to_root(RuleNode::new(
                "Strict",
                "ligand",
                TryFnLogic::new(
                    |case: &InputCase| {
                        if case.ligand.text("type").is("broken") {
                            return Err(RuleFault::Logic("unsupported ligand".to_string()));
                        }
                        Ok(false)
                    },
                    |_: &InputCase| Ok(Conclusion::empty()),
                ),
            ))
            .unwrap();
        builder.build().unwrap()
    }

    fn run(config: BatchConfig, input: &str) -> (BatchMetrics, Vec<PredictionRecord>) {
        let tree = tree();
        let runner = BatchRunner::new(&tree, config);
        let mut writer = JsonlWriter::new(Vec::new());
        let metrics = runner.run(JsonlReader::new(Cursor::new(input)), &mut writer).unwrap();

        let output = String::from_utf8(writer.into_inner()).unwrap();
        let records = output
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        (metrics, records)
    }

    #[test]
    fn test_single_mode() {
        let (metrics, records) = run(
            BatchConfig::default(),
            "{\"nanoparticle\":{\"type\":\"metallic\"},\"context\":{\"id\":\"a\"}}\n{}\n",
        );

        assert_eq!(metrics.resolved, 1);
        assert_eq!(metrics.unresolved, 1);
        assert_eq!(records[0].prediction.primary().unwrap().rule, "Metallic");
        assert_eq!(records[0].context, Section::new().with("id", "a"));
        assert_eq!(records[1].prediction.primary().unwrap().rule, "Root");
    }

    #[test]
    fn test_all_mode_with_no_conclusions_writes_empty_prediction() {
        let config = BatchConfig::default().with_mode(EvaluationMode::All);
        let (metrics, records) = run(config, "{}\n");

        assert!(records[0].prediction.is_empty());
        assert!(!records[0].is_failed());
        assert_eq!(metrics.unresolved, 1);
    }

    #[test]
    fn test_fault_is_isolated() {
        let (metrics, records) = run(
            BatchConfig::default(),
            "{\"ligand\":{\"type\":\"broken\"}}\n{\"nanoparticle\":{\"type\":\"metallic\"}}\n",
        );

        assert_eq!(metrics.faulted, 1);
        assert_eq!(metrics.resolved, 1);
        assert!(records[0].is_failed());
        assert!(records[0].prediction.is_empty());
        assert_eq!(records[1].index, 2);
    }

    #[test]
    fn test_malformed_line_writes_failed_record() {
        let (metrics, records) = run(BatchConfig::default(), "{not json\n{}\n");

        assert_eq!(metrics.malformed, 1);
        assert_eq!(records.len(), 2);
        assert!(records[0].error.as_deref().unwrap().starts_with("invalid input case"));
        assert_eq!(records[0].context, Section::new());
    }

    #[test]
    fn test_malformed_line_can_be_skipped() {
        let config = BatchConfig {
            skip_invalid_lines: true,
            ..BatchConfig::default()
        };
        let (metrics, records) = run(config, "{not json\n{}\n");

        assert_eq!(metrics.skipped, 1);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].index, 2);
    }

    #[test]
    fn test_limit_counts_non_blank_lines() {
        let config = BatchConfig::default().with_limit(2);
        let (metrics, records) = run(config, "{}\n\n{}\n{}\n");

        assert_eq!(metrics.processed(), 2);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_invalid_config_aborts() {
        let tree = tree();
        let runner = BatchRunner::new(&tree, BatchConfig::default().with_limit(0));
        let mut writer = JsonlWriter::new(Vec::new());
        assert!(runner.run(JsonlReader::new(Cursor::new("{}\n")), &mut writer).is_err());
    }
}
