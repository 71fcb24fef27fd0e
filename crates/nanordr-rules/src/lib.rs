//! nanordr Rules
//!
//! The standard nanoparticle rule base: five domain nodes under `Root`, each
//! refined by more specific exceptions.
//!
//! ```text
//! Root
//!  ├─ Biomolecule Node         (biological specificity)
//!  ├─ Material Node            (dominant core structure)
//!  ├─ Charge Interaction Node  (electrostatic modulation)
//!  ├─ Surface Feature Node     (PEG and other coatings)
//!  └─ Ligand Property Node     (fine ligand properties)
//! ```
//!
//! Attachment order is the priority order, at every level. The conditions and
//! actions are domain heuristics; the engine treats them as black boxes.
//!
//! # Examples
//!
//! ```
//! use nanordr_domain::{Affinity, InputCase, MonolayerOrder, Section};
//!
//! let tree = nanordr_rules::standard_tree().unwrap();
//! let case = InputCase {
//!     nanoparticle: Section::new().with("surface_charge", "positive"),
//!     ligand: Section::new().with("charge", "negative"),
//!     ..InputCase::default()
//! };
//!
//! let evaluation = tree.evaluate(&case).unwrap();
//! assert_eq!(evaluation.output.predicted_affinity, Some(Affinity::High));
//! assert_eq!(evaluation.output.monolayer_order, Some(MonolayerOrder::Stable));
//! ```

#![warn(missing_docs)]

pub mod names;
mod nodes;
mod refinements;

use nanordr_engine::{BuildError, RuleTree, RuleTreeBuilder};

/// Attach the standard rule base under the builder's `Root`
pub fn attach_standard_rules(builder: &mut RuleTreeBuilder) -> Result<(), BuildError> {
    builder.attach_to_root(nodes::biomolecule())?;
    builder.attach_to_root(nodes::material())?;
    builder.attach_to_root(nodes::charge_interaction())?;
    builder.attach_to_root(nodes::surface_feature())?;
    builder.attach_to_root(nodes::ligand_property())?;
    Ok(())
}

/// Build a fresh, frozen tree holding the standard rule base
///
/// Each call returns an independent tree.
pub fn standard_tree() -> Result<RuleTree, BuildError> {
    let mut builder = RuleTreeBuilder::new();
    attach_standard_rules(&mut builder)?;
    builder.build()
}
