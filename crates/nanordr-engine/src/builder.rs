//! One-time rule tree assembly

use crate::{BuildError, RuleNode, RuleTree};
use std::collections::HashSet;

/// Assembles a rule tree under an always-true `Root`
///
/// Attachment order is priority order, so the sequence of `attach` calls is
/// part of the rule base. Once [`RuleTreeBuilder::build`] returns, the tree is
/// frozen: [`RuleTree`] offers no way to add or reorder nodes.
#[derive(Debug)]
pub struct RuleTreeBuilder {
    root: RuleNode,
}

impl RuleTreeBuilder {
    /// Start a tree containing only `Root`
    pub fn new() -> Self {
        Self {
            root: RuleNode::root(),
        }
    }

    /// Name of the root node
    pub fn root_name(&self) -> &str {
        self.root.name()
    }

    /// Append `node` (with any exceptions it already carries) under `parent`
    ///
    /// Fails without modifying the tree when `parent` does not exist or when a
    /// name in `node`'s subtree is already taken.
    pub fn attach(&mut self, parent: &str, node: RuleNode) -> Result<(), BuildError> {
        let mut taken = names(&self.root)?;
        let mut incoming = Vec::new();
        node.visit(&mut |n: &RuleNode| incoming.push(n.name().to_string()));
        for name in incoming {
            if !taken.insert(name.clone()) {
                return Err(BuildError::DuplicateRuleName(name));
            }
        }

        let target = self
            .root
            .find_mut(parent)
            .ok_or_else(|| BuildError::UnknownParent(parent.to_string()))?;
        target.add_exception(node);
        Ok(())
    }

    /// Append `node` directly under `Root`
    pub fn attach_to_root(&mut self, node: RuleNode) -> Result<(), BuildError> {
        let root = self.root.name().to_string();
        self.attach(&root, node)
    }

    /// Validate and freeze the tree
    pub fn build(self) -> Result<RuleTree, BuildError> {
        names(&self.root)?;
        Ok(RuleTree::from_root(self.root))
    }
}

impl Default for RuleTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Collect every name in `root`'s subtree, failing on the first duplicate
fn names(root: &RuleNode) -> Result<HashSet<String>, BuildError> {
    let mut seen = HashSet::new();
    let mut duplicate = None;
    root.visit(&mut |node: &RuleNode| {
        if !seen.insert(node.name().to_string()) && duplicate.is_none() {
            duplicate = Some(node.name().to_string());
        }
    });

    match duplicate {
        Some(name) => Err(BuildError::DuplicateRuleName(name)),
        None => Ok(seen),
    }
}
