//! Rule nodes and the two traversal semantics

use crate::logic::{Always, FnLogic};
use nanordr_domain::{Conclusion, Evaluation, InputCase, RuleFault, RuleLogic};
use std::fmt;

/// Name of the always-true node every tree is rooted at
pub const ROOT_NAME: &str = "Root";

/// Domain tag for nodes that do not belong to a particular section
pub const GENERAL_DOMAIN: &str = "general";

/// A single decision point in a Ripple-Down Rules tree
///
/// Exceptions are kept in attachment order, and that order is the priority:
/// when two sibling exceptions both match, the earlier one wins. Exceptions
/// can only be appended.
pub struct RuleNode {
    name: String,
    domain: String,
    logic: Box<dyn RuleLogic>,
    exceptions: Vec<RuleNode>,
}

impl RuleNode {
    /// Create a node from any [`RuleLogic`]
    pub fn new(
        name: impl Into<String>,
        domain: impl Into<String>,
        logic: impl RuleLogic + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            domain: domain.into(),
            logic: Box::new(logic),
            exceptions: Vec::new(),
        }
    }

    /// Create a node from an infallible condition and action
    pub fn from_fns<C, A>(
        name: impl Into<String>,
        domain: impl Into<String>,
        condition: C,
        action: A,
    ) -> Self
    where
        C: Fn(&InputCase) -> bool + Send + Sync + 'static,
        A: Fn(&InputCase) -> Conclusion + Send + Sync + 'static,
    {
        Self::new(name, domain, FnLogic::new(condition, action))
    }

    /// The always-true, empty-conclusion root
    pub fn root() -> Self {
        Self::new(ROOT_NAME, GENERAL_DOMAIN, Always)
    }

    /// Node name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Informational domain tag
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Exceptions in priority order
    pub fn exceptions(&self) -> &[RuleNode] {
        &self.exceptions
    }

    /// Append an exception; it ranks after every existing one
    pub fn add_exception(&mut self, exception: RuleNode) {
        self.exceptions.push(exception);
    }

    /// Builder-style [`RuleNode::add_exception`]
    pub fn with_exception(mut self, exception: RuleNode) -> Self {
        self.add_exception(exception);
        self
    }

    /// Single-conclusion evaluation
    ///
    /// Returns `None` when this node's condition does not hold. Otherwise the
    /// first exception (in attachment order) that yields a result wins; if none
    /// does, this node's own action is scored and returned, even when it is
    /// empty.
    pub fn evaluate(&self, case: &InputCase) -> Result<Option<Evaluation>, RuleFault> {
        if !self.logic.matches(case)? {
            return Ok(None);
        }

        for exception in &self.exceptions {
            if let Some(evaluation) = exception.evaluate(case)? {
                return Ok(Some(evaluation));
            }
        }

        let output = self.logic.act(case)?;
        Ok(Some(Evaluation::assemble(self.name.as_str(), output, case)))
    }

    /// Multi-conclusion evaluation
    ///
    /// Collects the results of every exception subtree (in attachment order),
    /// then this node's own result if its conclusion is non-empty. The list is
    /// therefore ordered most specific first.
    pub fn evaluate_all(&self, case: &InputCase) -> Result<Vec<Evaluation>, RuleFault> {
        let mut results = Vec::new();
        self.collect(case, &mut results)?;
        Ok(results)
    }

    fn collect(&self, case: &InputCase, results: &mut Vec<Evaluation>) -> Result<(), RuleFault> {
        if !self.logic.matches(case)? {
            return Ok(());
        }

        for exception in &self.exceptions {
            exception.collect(case, results)?;
        }

        let output = self.logic.act(case)?;
        if !output.is_empty() {
            results.push(Evaluation::assemble(self.name.as_str(), output, case));
        }
        Ok(())
    }

    /// Textual hierarchy of this node and its exceptions
    pub fn explain(&self) -> String {
        let mut text = format!("Rule: {} (domain={})", self.name, self.domain);
        for exception in &self.exceptions {
            text.push_str("\n  ↳ Exception: ");
            text.push_str(&exception.explain().replace('\n', "\n    "));
        }
        text
    }

    /// Visit this node and every descendant, parents before children
    pub fn visit<'a>(&'a self, visitor: &mut impl FnMut(&'a RuleNode)) {
        visitor(self);
        for exception in &self.exceptions {
            exception.visit(visitor);
        }
    }

    /// Number of nodes in this subtree, including this one
    pub fn rule_count(&self) -> usize {
        1 + self.exceptions.iter().map(RuleNode::rule_count).sum::<usize>()
    }

    /// Find a node in this subtree by name
    pub fn find(&self, name: &str) -> Option<&RuleNode> {
        if self.name == name {
            return Some(self);
        }
        self.exceptions.iter().find_map(|e| e.find(name))
    }

    pub(crate) fn find_mut(&mut self, name: &str) -> Option<&mut RuleNode> {
        if self.name == name {
            return Some(self);
        }
        self.exceptions.iter_mut().find_map(|e| e.find_mut(name))
    }
}

impl fmt::Debug for RuleNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleNode")
            .field("name", &self.name)
            .field("domain", &self.domain)
            .field("exceptions", &self.exceptions)
            .finish_non_exhaustive()
    }
}
