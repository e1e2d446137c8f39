//! Validation error taxonomy
//!
//! Every failure here is a contract violation by the caller. Nothing is
//! retried or coerced; the error is reported from the call that triggered it.

use crate::{LogicOperator, TernaryValue};
use thiserror::Error;

/// Errors raised when inputs to the algebra or the evaluators are invalid
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Raw ternary input outside {-1, 0, 1}
    #[error("Invalid ternary value: {0} (expected -1, 0 or 1)")]
    InvalidTernaryValue(i64),

    /// Confidence outside [0.0, 1.0] (NaN included)
    #[error("Invalid confidence: {0} (expected a value in [0.0, 1.0])")]
    InvalidConfidence(f64),

    /// An operation over a value sequence was given no values
    #[error("Input sequence cannot be empty")]
    EmptyInputSequence,

    /// A confidence propagation rule was given no confidences
    #[error("Confidence set cannot be empty")]
    EmptyConfidenceSet,

    /// Value and confidence sequences differ in length
    #[error("Mismatched lengths: {values} values but {confidences} confidences")]
    MismatchedLengths {
        /// Number of ternary values supplied
        values: usize,
        /// Number of confidences supplied
        confidences: usize,
    },

    /// A TRUE or FALSE atom was given a confidence other than 1.0
    #[error("Definite value {value} requires confidence 1.0, got {confidence}")]
    InvalidDefiniteConfidence {
        /// The definite value
        value: TernaryValue,
        /// The rejected confidence
        confidence: f64,
    },

    /// An operator was given the wrong number of operands
    #[error("Operator {operator} expects {expected} operand(s), got {actual}")]
    InvalidArity {
        /// The operator being applied
        operator: LogicOperator,
        /// Required operand count
        expected: usize,
        /// Supplied operand count
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::InvalidTernaryValue(2).to_string(),
            "Invalid ternary value: 2 (expected -1, 0 or 1)"
        );
        assert_eq!(
            ValidationError::MismatchedLengths { values: 3, confidences: 2 }.to_string(),
            "Mismatched lengths: 3 values but 2 confidences"
        );
        assert_eq!(
            ValidationError::InvalidDefiniteConfidence {
                value: TernaryValue::True,
                confidence: 0.5,
            }
            .to_string(),
            "Definite value T requires confidence 1.0, got 0.5"
        );
        assert_eq!(
            ValidationError::InvalidArity {
                operator: LogicOperator::Not,
                expected: 1,
                actual: 2,
            }
            .to_string(),
            "Operator ¬ expects 1 operand(s), got 2"
        );
    }
}
