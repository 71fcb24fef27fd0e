//! Command implementations.

pub mod eval;
pub mod run;
pub mod stats;
pub mod tree;

pub use self::eval::execute_eval;
pub use self::run::execute_run;
pub use self::stats::execute_stats;
pub use self::tree::{execute_tree, load_tree};
