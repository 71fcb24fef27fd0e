//! Eval command implementation.

use crate::cli::EvalArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use nanordr_domain::InputCase;
use nanordr_engine::RuleTree;
use std::fs;
use std::io::Read;

/// Read one input case from a file, or from stdin when `input` is `-`.
pub fn read_case(input: &str) -> Result<InputCase> {
    let contents = if input == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(input)?
    };

    if contents.trim().is_empty() {
        return Err(CliError::InvalidInput("no input case given".to_string()));
    }
    Ok(serde_json::from_str(&contents)?)
}

/// Execute the eval command.
pub fn execute_eval(args: EvalArgs, tree: &RuleTree, formatter: &Formatter) -> Result<()> {
    let case = read_case(&args.input)?;

    if args.all {
        let evaluations = tree.evaluate_all(&case)?;
        println!("{}", formatter.format_evaluations(&evaluations)?);
    } else {
        let evaluation = tree.evaluate(&case)?;
        println!("{}", formatter.format_evaluation(&evaluation)?);
    }

    Ok(())
}
