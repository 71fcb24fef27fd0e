//! nanordr Batch
//!
//! Applies a frozen rule tree to newline-delimited JSON files of input cases
//! and summarises the resulting prediction files.
//!
//! - [`BatchRunner`]: evaluates each non-blank line and writes one
//!   [`PredictionRecord`] per item, isolating per-item failures
//! - [`BatchConfig`]: limit, evaluation mode and malformed-line policy, loadable
//!   from TOML
//! - [`BatchMetrics`]: counters for a single run
//! - [`PredictionStats`]: rule, affinity and monolayer-order distributions of
//!   a prediction file

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod jsonl;
pub mod metrics;
pub mod record;
pub mod runner;
pub mod stats;

pub use config::{BatchConfig, EvaluationMode, QUICK_LIMIT};
pub use error::{BatchError, Result};
pub use jsonl::{JsonlReader, JsonlWriter, Line};
pub use metrics::BatchMetrics;
pub use record::{EmptyPrediction, MultiPrediction, Prediction, PredictionRecord};
pub use runner::BatchRunner;
pub use stats::PredictionStats;
