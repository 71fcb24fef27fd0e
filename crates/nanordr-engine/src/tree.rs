//! Frozen rule trees

use crate::RuleNode;
use nanordr_domain::{Conclusion, Evaluation, InputCase, RuleFault};
use std::time::Instant;

/// A built, read-only rule tree
///
/// Evaluation only reads the tree and allocates its own results, so one tree
/// can serve any number of threads without locking.
#[derive(Debug)]
pub struct RuleTree {
    root: RuleNode,
}

impl RuleTree {
    pub(crate) fn from_root(root: RuleNode) -> Self {
        Self { root }
    }

    /// The root node
    pub fn root(&self) -> &RuleNode {
        &self.root
    }

    /// Single-conclusion evaluation of `case`
    ///
    /// Always returns a result: when nothing below `Root` matches, the result
    /// names `Root` and carries an empty conclusion. `execution_time` records
    /// the duration of this call.
    pub fn evaluate(&self, case: &InputCase) -> Result<Evaluation, RuleFault> {
        let start = Instant::now();
        let evaluation = match self.root.evaluate(case)? {
            Some(evaluation) => evaluation,
            None => Evaluation::assemble(self.root.name(), Conclusion::empty(), case),
        };
        Ok(evaluation.with_execution_time(start.elapsed().as_secs_f64()))
    }

    /// Multi-conclusion evaluation of `case`, most specific first
    pub fn evaluate_all(&self, case: &InputCase) -> Result<Vec<Evaluation>, RuleFault> {
        self.root.evaluate_all(case)
    }

    /// Textual hierarchy of the whole tree
    pub fn explain(&self) -> String {
        self.root.explain()
    }

    /// Total number of nodes, including `Root`
    pub fn rule_count(&self) -> usize {
        self.root.rule_count()
    }

    /// Node names, parents before children
    pub fn rule_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        collect_names(&self.root, &mut names);
        names
    }
}

fn collect_names<'a>(node: &'a RuleNode, names: &mut Vec<&'a str>) {
    names.push(node.name());
    for exception in node.exceptions() {
        collect_names(exception, names);
    }
}
