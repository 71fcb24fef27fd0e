//! nanordr Engine
//!
//! Ripple-Down Rules inference over nanoparticle input cases.
//!
//! The engine provides:
//! - [`RuleNode`]: a condition, an action and an ordered list of exceptions
//! - Single-conclusion evaluation ([`RuleNode::evaluate`]): the deepest matching
//!   rule with no matching exception wins, earlier-attached siblings first
//! - Multi-conclusion evaluation ([`RuleNode::evaluate_all`]): every matching
//!   node with a non-empty conclusion, most specific first
//! - [`RuleTreeBuilder`]: one-time, order-sensitive assembly under an
//!   always-true `Root`, frozen into a read-only [`RuleTree`]
//!
//! The engine never logs, retries or recovers: a fault raised by a rule
//! propagates to the caller unchanged.
//!
//! # Examples
//!
//! ```
//! use nanordr_domain::{Affinity, Conclusion, InputCase, MonolayerOrder, Section};
//! use nanordr_engine::{RuleNode, RuleTreeBuilder};
//!
//! let mut builder = RuleTreeBuilder::new();
//! builder
//!     .attach_to_root(RuleNode::from_fns(
//!         "Metallic",
//!         "nanoparticle",
//!         |case| case.nanoparticle.text("type").is("metallic"),
//!         |_| Conclusion::predict(Affinity::High, MonolayerOrder::Ordered),
//!     ))
//!     .unwrap();
//! let tree = builder.build().unwrap();
//!
//! let case = InputCase {
//!     nanoparticle: Section::new().with("type", "metallic"),
//!     ..InputCase::default()
//! };
//! let evaluation = tree.evaluate(&case).unwrap();
//! assert_eq!(evaluation.rule, "Metallic");
//! ```

#![warn(missing_docs)]

mod builder;
mod error;
mod logic;
mod node;
mod tree;


pub use builder::RuleTreeBuilder;
pub use error::BuildError;
pub use logic::{Always, FnLogic, TryFnLogic};
pub use node::{RuleNode, GENERAL_DOMAIN, ROOT_NAME};
pub use tree::RuleTree;
