//! Trivalent Domain Layer
//!
//! This crate contains the algebra every other layer builds on: the
//! three-valued Kleene truth domain, the confidence scores attached to
//! ternary values, and the rules for propagating confidence through
//! logical connectives.
//!
//! ## Key Concepts
//!
//! - **TernaryValue**: FALSE (-1) < UNKNOWN (0) < TRUE (1)
//! - **Kleene operations**: AND = min, OR = max, NOT = negation
//! - **Confidence**: certainty in [0, 1] about an associated ternary value,
//!   not a probability that the value is TRUE
//! - **Propagation**: AND multiplies, OR uses `1 - ∏(1 - cᵢ)`, NOT preserves
//!
//! ## Architecture
//!
//! - No I/O and no logging
//! - Every raw input is validated before any arithmetic runs
//! - Evaluation strategies live in `trivalent-engine`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod confidence;
pub mod error;
pub mod propagation;
pub mod ternary;
pub mod validation;

// Re-exports for convenience
pub use confidence::Confidence;
pub use error::ValidationError;
pub use ternary::{LogicOperator, TernaryValue};
