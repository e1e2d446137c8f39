//! Evaluation outcomes and modes

use serde::{Deserialize, Serialize};
use std::fmt;
use trivalent_domain::{validation, Confidence, TernaryValue, ValidationError};

/// Evaluation strategy over an expression tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationMode {
    /// Short-circuits on FALSE under AND and TRUE under OR
    Optimized,

    /// Always evaluates both children; the reference baseline
    Naive,
}

impl EvaluationMode {
    /// Get the mode name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            EvaluationMode::Optimized => "optimized",
            EvaluationMode::Naive => "naive",
        }
    }
}

impl fmt::Display for EvaluationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value, confidence and work done for one evaluated (sub)expression
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvaluationResult {
    value: TernaryValue,
    confidence: Confidence,
    evaluation_count: usize,
}

impl EvaluationResult {
    /// Create a result, rejecting a confidence outside [0, 1]
    pub fn new(
        value: TernaryValue,
        confidence: f64,
        evaluation_count: usize,
    ) -> Result<Self, ValidationError> {
        Ok(Self::from_parts(
            value,
            validation::confidence(confidence)?,
            evaluation_count,
        ))
    }

    pub(crate) fn from_parts(
        value: TernaryValue,
        confidence: Confidence,
        evaluation_count: usize,
    ) -> Self {
        Self {
            value,
            confidence,
            evaluation_count,
        }
    }

    /// Get the ternary value
    pub fn value(&self) -> TernaryValue {
        self.value
    }

    /// Get the raw confidence score
    pub fn confidence(&self) -> f64 {
        self.confidence.value()
    }

    pub(crate) fn confidence_score(&self) -> Confidence {
        self.confidence
    }

    /// Number of atoms actually visited
    pub fn evaluation_count(&self) -> usize {
        self.evaluation_count
    }

    /// Same value, and confidences within `tolerance` of each other.
    ///
    /// Evaluation counts are ignored.
    pub fn agrees_with(&self, other: &EvaluationResult, tolerance: f64) -> bool {
        self.value == other.value && (self.confidence() - other.confidence()).abs() <= tolerance
    }
}
