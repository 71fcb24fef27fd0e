//! Stats command implementation.

use crate::cli::StatsArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use nanordr_batch::PredictionStats;

/// Execute the stats command.
pub fn execute_stats(args: StatsArgs, formatter: &Formatter) -> Result<PredictionStats> {
    if args.top == 0 {
        return Err(CliError::InvalidInput("--top must be at least 1".to_string()));
    }

    let stats = PredictionStats::load(&args.file)?;
    println!("{}", formatter.format_stats(&stats, args.top)?);

    if stats.unreadable > 0 && !formatter.is_plain() {
        println!(
            "{}",
            formatter.warning(&format!("{} line(s) were not prediction records", stats.unreadable))
        );
    }
    Ok(stats)
}
