//! Confidence module - certainty scores attached to ternary values

use crate::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Certainty about an associated ternary value, in [0.0, 1.0]
///
/// A TRUE with confidence 0.6 reads as "60% sure it is TRUE", not as
/// "60% likely to be true". The bound is checked on every construction
/// path, deserialization included.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Confidence(f64);

impl Confidence {
    /// Full certainty
    pub const CERTAIN: Confidence = Confidence(1.0);

    /// Default certainty for an UNKNOWN atom given no explicit confidence
    pub const UNKNOWN_DEFAULT: Confidence = Confidence(0.5);

    /// Create a confidence, rejecting values outside [0, 1] and NaN
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::InvalidConfidence(value));
        }
        Ok(Self(value))
    }

    /// Get the raw score
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Whether this is exactly 1.0
    pub fn is_certain(&self) -> bool {
        self.0 == 1.0
    }
}

impl TryFrom<f64> for Confidence {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(confidence: Confidence) -> Self {
        confidence.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
