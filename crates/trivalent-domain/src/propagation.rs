//! Confidence propagation rules
//!
//! Pure functions combining confidence scores across Kleene connectives:
//! 1. Conjunction: `∏ cᵢ` (independent evidence, all conjuncts must hold)
//! 2. Disjunction: `1 - ∏(1 - cᵢ)` (any disjunct suffices)
//! 3. Negation: identity
//!
//! The tree evaluator additionally forces 1.0 when a conjunction yields FALSE
//! or a disjunction yields TRUE; that rule lives with the evaluator because
//! it depends on the combined value, not on the confidences alone.

use crate::{validation, Confidence, TernaryValue, ValidationError};

/// Conjunction confidence over a non-empty set: `∏ cᵢ`
pub fn conjunction(confidences: &[f64]) -> Result<Confidence, ValidationError> {
    let confidences = validation::confidence_set(confidences)?;
    Ok(conjunction_of(&confidences))
}

/// Disjunction confidence over a non-empty set: `1 - ∏(1 - cᵢ)`
pub fn disjunction(confidences: &[f64]) -> Result<Confidence, ValidationError> {
    let confidences = validation::confidence_set(confidences)?;
    Ok(disjunction_of(&confidences))
}

/// Negation confidence: negating a value does not change certainty about it
pub fn negation(confidence: Confidence) -> Confidence {
    confidence
}

/// Conjunction over already-validated confidences (1.0 for an empty slice)
pub fn conjunction_of(confidences: &[Confidence]) -> Confidence {
    let product = confidences.iter().map(Confidence::value).product::<f64>();
    bounded(product)
}

/// Disjunction over already-validated confidences (0.0 for an empty slice)
pub fn disjunction_of(confidences: &[Confidence]) -> Confidence {
    let miss = confidences
        .iter()
        .map(|c| 1.0 - c.value())
        .product::<f64>();
    bounded(1.0 - miss)
}

/// Binary conjunction: `c1 × c2`
pub fn and_pair(left: Confidence, right: Confidence) -> Confidence {
    conjunction_of(&[left, right])
}

/// Binary disjunction: `1 - (1 - c1)(1 - c2)`
pub fn or_pair(left: Confidence, right: Confidence) -> Confidence {
    disjunction_of(&[left, right])
}

/// Equivalence confidence: `c1 × c2`
pub fn equivalence(left: Confidence, right: Confidence) -> Confidence {
    and_pair(left, right)
}

/// Implication confidence: `1 - c_ant + c_ant × c_cons`
///
/// Computed as the disjunction of the negated antecedent's complement with
/// the consequent.
pub fn implication(antecedent: Confidence, consequent: Confidence) -> Confidence {
    or_pair(bounded(1.0 - antecedent.value()), consequent)
}

/// Probability that UNKNOWN survives a chain of `n` uniformly random
/// inputs: `(2/3)^(n - 1)`, and 1.0 for chains of at most one input
pub fn unknown_persistence_probability(n: u32) -> f64 {
    if n <= 1 {
        return 1.0;
    }
    (2.0_f64 / 3.0).powf(f64::from(n - 1))
}

/// Whether an UNKNOWN result was preserved rather than absorbed.
///
/// True only when `result` is UNKNOWN and no input is definite.
pub fn preserves_unknown(result: TernaryValue, inputs: &[TernaryValue]) -> bool {
    result == TernaryValue::Unknown && !inputs.iter().any(|v| v.is_definite())
}

/// Products and complements of values in [0, 1] stay in [0, 1]; clamp only
/// absorbs the last-ulp drift of `1.0 - x`.
fn bounded(value: f64) -> Confidence {
    Confidence::new(value.clamp(0.0, 1.0)).unwrap_or(Confidence::CERTAIN)
}
