//! Tree command implementation.

use crate::error::Result;
use crate::output::Formatter;
use nanordr_engine::RuleTree;

/// Assemble the standard rule tree.
pub fn load_tree() -> Result<RuleTree> {
    let tree = nanordr_rules::standard_tree()?;
    tracing::debug!("Loaded rule tree with {} rules", tree.rule_count());
    Ok(tree)
}

/// Execute the tree command.
pub fn execute_tree(tree: &RuleTree, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_tree(tree)?);
    if !formatter.is_plain() {
        println!();
        println!("{}", formatter.info(&format!("{} rule(s) including Root", tree.rule_count())));
    }
    Ok(())
}
