//! nanordr Domain Layer
//!
//! Core value types and pure computations for the nanoparticle Ripple-Down Rules
//! engine. Nothing in this crate performs I/O or logs; every function is a pure
//! function of its arguments.
//!
//! ## Key Concepts
//!
//! - **Input Case**: a nested record (`nanoparticle`, `ligand`, `biomolecule`,
//!   `surface`, `context`) whose inferred attributes carry a value, a confidence
//!   and a provenance string
//! - **Observed**: explicit reading of an attribute that separates a classified
//!   `"unknown"` from an absent field
//! - **Conclusion**: the partial prediction a rule produces
//! - **Evaluation**: a conclusion plus the blended confidence and provenance trail
//! - **RuleLogic**: the trait seam behind every rule's condition and action
//!
//! ## Architecture
//!
//! The domain crate only depends on serde (the input record *is* a JSON-shaped
//! value) and thiserror. Rule trees live in `nanordr-engine`, concrete rules in
//! `nanordr-rules`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod case;
pub mod conclusion;
pub mod confidence;
pub mod error;
pub mod evaluation;
pub mod provenance;
pub mod traits;

// Re-exports for convenience
pub use case::{Attribute, InputCase, Observed, Section, SectionKind};
pub use conclusion::{Affinity, Conclusion, MonolayerOrder, ResolvedConclusion};
pub use confidence::{aggregate_input_confidence, InputConfidence};
pub use error::RuleFault;
pub use evaluation::Evaluation;
pub use provenance::ProvenanceTrail;
pub use traits::RuleLogic;
