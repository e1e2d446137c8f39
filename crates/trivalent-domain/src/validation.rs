//! Input guards
//!
//! Every entry point into the algebra and the evaluators funnels raw caller
//! data through these functions before any arithmetic runs. Checks fail fast
//! on the first violation and never coerce.

use crate::{Confidence, TernaryValue, ValidationError};

/// Validate a raw ternary input (must be -1, 0 or 1)
pub fn ternary(raw: i64) -> Result<TernaryValue, ValidationError> {
    TernaryValue::from_raw(raw)
}

/// Validate a raw confidence (must lie in [0.0, 1.0])
pub fn confidence(raw: f64) -> Result<Confidence, ValidationError> {
    Confidence::new(raw)
}

/// Validate a confidence paired with a value.
///
/// Definite values (TRUE, FALSE) are certain by convention, so anything
/// other than exactly 1.0 is rejected for them. UNKNOWN accepts the whole
/// [0, 1] range.
pub fn paired_confidence(value: TernaryValue, raw: f64) -> Result<Confidence, ValidationError> {
    if value.is_definite() && raw != 1.0 {
        return Err(ValidationError::InvalidDefiniteConfidence {
            value,
            confidence: raw,
        });
    }
    confidence(raw)
}

/// Validate a non-empty confidence set
pub fn confidence_set(raw: &[f64]) -> Result<Vec<Confidence>, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::EmptyConfidenceSet);
    }
    raw.iter().map(|&c| confidence(c)).collect()
}

/// Check the shape of a sequence: at least one value, and when confidences
/// are tracked, exactly one per value
pub fn aligned(values: usize, confidences: Option<usize>) -> Result<(), ValidationError> {
    if values == 0 {
        return Err(ValidationError::EmptyInputSequence);
    }
    match confidences {
        Some(confidences) if confidences != values => {
            Err(ValidationError::MismatchedLengths { values, confidences })
        }
        _ => Ok(()),
    }
}

/// Validate a value sequence and its optional, position-aligned confidences.
///
/// Checks run in order: emptiness, length agreement, then each value and
/// each confidence from left to right.
pub fn sequence(
    values: &[i64],
    confidences: Option<&[f64]>,
) -> Result<(Vec<TernaryValue>, Option<Vec<Confidence>>), ValidationError> {
    aligned(values.len(), confidences.map(<[f64]>::len))?;

    let values = values
        .iter()
        .map(|&v| ternary(v))
        .collect::<Result<Vec<_>, _>>()?;

    let confidences = confidences.map(confidence_set).transpose()?;

    Ok((values, confidences))
}
