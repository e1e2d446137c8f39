//! Flat-sequence evaluation
//!
//! Applies one operator across an ordered list of values, optionally
//! tracking confidence, without building a tree. The result for
//! `[x0, x1, ..., xn]` is `op(x0, result([x1, ..., xn]))`: a right fold
//! whose recursion stops early when the head of the remaining suffix is the
//! operator's absorbing element (FALSE for AND, TRUE for OR). An early stop
//! reports the combined confidence of that whole suffix.
//!
//! The stop is keyed on suffix heads as they are reached, and a final
//! single-element suffix is always returned as-is. This is weaker than the
//! tree evaluator's per-node short-circuit and the resulting confidences
//! depend on it, so it must not be "upgraded" to a scan for any absorbing
//! element.

use serde::Serialize;
use trivalent_domain::{
    propagation, validation, Confidence, LogicOperator, TernaryValue, ValidationError,
};

/// Value and (when tracked) confidence of a folded sequence
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SequenceOutcome {
    /// Folded ternary value
    pub value: TernaryValue,

    /// Folded confidence; `None` when confidence tracking was disabled
    pub confidence: Option<Confidence>,
}

/// Fold raw ternary integers with `operator`.
///
/// Passing `None` for `confidences` disables confidence tracking; it does
/// not mean "confidence 1.0". All inputs are validated before folding.
///
/// # Examples
///
/// ```
/// use trivalent_domain::{LogicOperator, TernaryValue};
/// use trivalent_engine::recursive_ternary;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let outcome = recursive_ternary(LogicOperator::And, &[1, 0, -1], Some(&[0.9, 0.8, 0.7]))?;
/// assert_eq!(outcome.value, TernaryValue::False);
/// assert!((outcome.confidence.unwrap().value() - 0.504).abs() < 1e-9);
/// # Ok(())
/// # }
/// ```
pub fn recursive_ternary(
    operator: LogicOperator,
    values: &[i64],
    confidences: Option<&[f64]>,
) -> Result<SequenceOutcome, ValidationError> {
    let (values, confidences) = validation::sequence(values, confidences)?;
    Ok(fold(operator, &values, confidences.as_deref()))
}

/// Fold already-typed values with `operator`
pub fn evaluate_sequence(
    operator: LogicOperator,
    values: &[TernaryValue],
    confidences: Option<&[Confidence]>,
) -> Result<SequenceOutcome, ValidationError> {
    validation::aligned(values.len(), confidences.map(<[Confidence]>::len))?;
    Ok(fold(operator, values, confidences))
}

/// Iterative form of the right fold; `values` is non-empty and
/// `confidences`, if present, has the same length.
fn fold(
    operator: LogicOperator,
    values: &[TernaryValue],
    confidences: Option<&[Confidence]>,
) -> SequenceOutcome {
    let last = values.len() - 1;

    // The first suffix (other than the final singleton) headed by the
    // absorbing element ends the recursion.
    let stop = operator
        .absorbing_element()
        .and_then(|absorbing| values[..last].iter().position(|&v| v == absorbing));

    let (start, mut value, mut confidence) = match stop {
        Some(i) => (
            i,
            values[i],
            confidences.map(|cs| combine(operator, &cs[i..])),
        ),
        None => (last, values[last], confidences.map(|cs| cs[last])),
    };

    for i in (0..start).rev() {
        value = operator.apply(values[i], value);
        confidence = confidences
            .zip(confidence)
            .map(|(cs, tail)| combine(operator, &[cs[i], tail]));
    }

    SequenceOutcome { value, confidence }
}

/// Combined confidence of `confidences` under `operator`; NOT keeps the
/// head's confidence
fn combine(operator: LogicOperator, confidences: &[Confidence]) -> Confidence {
    match operator {
        LogicOperator::And => propagation::conjunction_of(confidences),
        LogicOperator::Or => propagation::disjunction_of(confidences),
        LogicOperator::Not => confidences
            .first()
            .copied()
            .map(propagation::negation)
            .unwrap_or(Confidence::CERTAIN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TernaryValue::{False as F, True as T, Unknown as U};

    fn conf(outcome: &SequenceOutcome) -> f64 {
        outcome.confidence.map(|c| c.value()).unwrap_or(f64::NAN)
    }

    #[test]
    fn test_and_with_confidences() {
        let outcome =
            recursive_ternary(LogicOperator::And, &[1, 0, -1], Some(&[0.9, 0.8, 0.7])).unwrap();
        assert_eq!(outcome.value, F);
        assert!((conf(&outcome) - 0.504).abs() < 1e-9);
    }

    #[test]
    fn test_or_with_confidences() {
        let outcome =
            recursive_ternary(LogicOperator::Or, &[-1, 0, 1], Some(&[0.9, 0.8, 0.7])).unwrap();
        assert_eq!(outcome.value, T);
        assert!((conf(&outcome) - 0.994).abs() < 1e-9);
    }

    #[test]
    fn test_without_confidences() {
        let outcome = recursive_ternary(LogicOperator::And, &[1, 0, -1], None).unwrap();
        assert_eq!(outcome.value, F);
        assert_eq!(outcome.confidence, None);

        let outcome = recursive_ternary(LogicOperator::Or, &[-1, 0, -1], None).unwrap();
        assert_eq!(outcome.value, U);
    }

    #[test]
    fn test_early_exit_on_head() {
        let outcome =
            recursive_ternary(LogicOperator::And, &[-1, 1, 0], Some(&[0.9, 0.8, 0.7])).unwrap();
        assert_eq!(outcome.value, F);
        // every element's confidence is multiplied in
        assert!((conf(&outcome) - 0.504).abs() < 1e-9);

        let outcome =
            recursive_ternary(LogicOperator::Or, &[1, -1, 0], Some(&[0.9, 0.8, 0.7])).unwrap();
        assert_eq!(outcome.value, T);
        assert!((conf(&outcome) - 0.994).abs() < 1e-9);
    }

    #[test]
    fn test_early_exit_without_confidences() {
        let outcome = recursive_ternary(LogicOperator::And, &[-1, 1, 0], None).unwrap();
        assert_eq!(outcome.value, F);
        assert_eq!(outcome.confidence, None);
    }

    #[test]
    fn test_absorbing_value_is_not_certain() {
        // Unlike the tree evaluator, a FALSE result keeps the product
        let outcome = recursive_ternary(LogicOperator::And, &[0, -1], Some(&[0.5, 1.0])).unwrap();
        assert_eq!(outcome.value, F);
        assert!((conf(&outcome) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_single_element() {
        let outcome = recursive_ternary(LogicOperator::And, &[1], None).unwrap();
        assert_eq!(outcome.value, T);
        assert_eq!(outcome.confidence, None);

        let outcome = recursive_ternary(LogicOperator::And, &[1], Some(&[0.9])).unwrap();
        assert_eq!(outcome.value, T);
        assert!((conf(&outcome) - 0.9).abs() < 1e-12);

        // a lone absorbing element is returned as-is, not re-combined
        let outcome = recursive_ternary(LogicOperator::Or, &[1], Some(&[0.3])).unwrap();
        assert!((conf(&outcome) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_not_negates_head() {
        let outcome =
            recursive_ternary(LogicOperator::Not, &[1, 0, -1], Some(&[0.9, 0.8, 0.7])).unwrap();
        assert_eq!(outcome.value, F);
        assert!((conf(&outcome) - 0.9).abs() < 1e-12);

        let outcome = recursive_ternary(LogicOperator::Not, &[0], None).unwrap();
        assert_eq!(outcome.value, U);
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(
            recursive_ternary(LogicOperator::And, &[], None),
            Err(ValidationError::EmptyInputSequence)
        );
        assert_eq!(
            evaluate_sequence(LogicOperator::Or, &[], None),
            Err(ValidationError::EmptyInputSequence)
        );
    }

    #[test]
    fn test_mismatched_lengths() {
        assert_eq!(
            recursive_ternary(LogicOperator::And, &[1, 0, -1], Some(&[0.9, 0.8])),
            Err(ValidationError::MismatchedLengths { values: 3, confidences: 2 })
        );
        assert_eq!(
            evaluate_sequence(LogicOperator::And, &[T, U], Some(&[Confidence::CERTAIN])),
            Err(ValidationError::MismatchedLengths { values: 2, confidences: 1 })
        );
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(
            recursive_ternary(LogicOperator::And, &[1, 2], None),
            Err(ValidationError::InvalidTernaryValue(2))
        );
        assert_eq!(
            recursive_ternary(LogicOperator::Or, &[1, 0], Some(&[0.5, 1.5])),
            Err(ValidationError::InvalidConfidence(1.5))
        );
    }

    #[test]
    fn test_typed_entry_point() {
        let outcome = evaluate_sequence(LogicOperator::Or, &[F, U, F], None).unwrap();
        assert_eq!(outcome.value, U);
    }

    #[test]
    fn test_long_sequence_does_not_recurse() {
        let values = vec![0_i64; 100_000];
        let confidences = vec![1.0; 100_000];
        let outcome =
            recursive_ternary(LogicOperator::And, &values, Some(&confidences)).unwrap();
        assert_eq!(outcome.value, U);
        assert_eq!(conf(&outcome), 1.0);
    }
}
