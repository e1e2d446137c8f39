//! Trivalent Engine
//!
//! Evaluates Kleene three-valued expressions and propagates confidence
//! through them.
//!
//! # Overview
//!
//! The engine provides:
//! - **Expression trees**: atoms, conjunction, disjunction and negation
//! - **Two evaluation modes**: optimized (short-circuiting) and naive
//!   (exhaustive), which must agree on value and confidence
//! - **Instrumentation**: per-mode evaluation counts and wall-clock time,
//!   with evaluation-reduction and speedup ratios
//! - **Flat sequences**: one operator folded across a list of values
//!
//! # Usage
//!
//! ## Tree Evaluation
//!
//! ```
//! use trivalent_engine::{EvaluationMode, Evaluator, Expression};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let expr = Expression::conjunction(
//!     Expression::atom(0, Some(0.6))?,
//!     Expression::atom(0, Some(0.7))?,
//! );
//!
//! let mut evaluator = Evaluator::default_config();
//! let result = evaluator.evaluate(&expr, EvaluationMode::Optimized);
//! assert!((result.confidence() - 0.42).abs() < 1e-9);
//! # Ok(())
//! # }
//! ```
//!
//! ## Comparing Modes
//!
//! ```
//! use trivalent_domain::LogicOperator;
//! use trivalent_engine::{Evaluator, Expression};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let expr = Expression::chain_raw(LogicOperator::And, &[-1, 0, 1], &[1.0, 0.5, 1.0])?;
//!
//! let mut evaluator = Evaluator::default_config();
//! let comparison = evaluator.compare(&expr);
//! assert!(comparison.agrees);
//!
//! let summary = evaluator.summary();
//! assert_eq!(summary.optimized_evaluations, 1);
//! assert_eq!(summary.naive_evaluations, 3);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! The evaluator can be configured via TOML:
//!
//! ```toml
//! record_timing = true
//! trace_short_circuits = false
//! agreement_tolerance = 1e-6
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod evaluator;
mod expression;
mod metrics;
mod result;
mod sequence;

pub use config::{EvaluatorConfig, DEFAULT_AGREEMENT_TOLERANCE};
pub use error::ConfigError;
pub use evaluator::{Evaluator, ModeComparison};
pub use expression::{Expression, Proposition};
pub use metrics::{EvaluatorStats, PerformanceSummary};
pub use result::{EvaluationMode, EvaluationResult};
pub use sequence::{evaluate_sequence, recursive_ternary, SequenceOutcome};

pub use trivalent_domain::{Confidence, LogicOperator, TernaryValue, ValidationError};
