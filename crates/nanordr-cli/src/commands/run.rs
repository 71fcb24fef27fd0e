//! Run command implementation.

use crate::cli::RunArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use nanordr_batch::{BatchConfig, BatchMetrics, BatchRunner};
use nanordr_engine::RuleTree;

/// Merge command-line overrides into the configured batch defaults.
pub fn batch_config(args: &RunArgs, config: &Config) -> BatchConfig {
    let mut batch = config.batch.clone();
    if let Some(limit) = args.limit {
        batch.limit = Some(limit);
    }
    if let Some(mode) = args.mode {
        batch.mode = mode.into();
    }
    if args.skip_invalid {
        batch.skip_invalid_lines = true;
    }
    batch
}

/// Execute the run command.
pub fn execute_run(
    args: RunArgs,
    tree: &RuleTree,
    config: &Config,
    formatter: &Formatter,
) -> Result<BatchMetrics> {
    let batch = batch_config(&args, config);
    let metrics = BatchRunner::new(tree, batch).run_files(&args.input, &args.output)?;

    println!("{}", formatter.format_metrics(&metrics)?);
    if !formatter.is_plain() {
        println!();
        println!(
            "{}",
            formatter.success(&format!(
                "Wrote {} record(s) to {}",
                metrics.written,
                args.output.display()
            ))
        );
        if metrics.failed() > 0 {
            println!(
                "{}",
                formatter.warning(&format!("{} item(s) failed; see the error field", metrics.failed()))
            );
        }
    }

    Ok(metrics)
}
