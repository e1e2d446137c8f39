//! Ternary module - the Kleene truth domain and its connectives

use crate::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-valued Kleene truth value
///
/// Values carry the arithmetic encoding FALSE = -1, UNKNOWN = 0, TRUE = 1,
/// and the derived ordering follows it: FALSE < UNKNOWN < TRUE. With that
/// encoding the connectives reduce to plain arithmetic:
/// - AND is `min(a, b)`
/// - OR is `max(a, b)`
/// - NOT is `-a`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
#[repr(i8)]
pub enum TernaryValue {
    /// Definitely false
    False = -1,

    /// Neither established nor refuted
    Unknown = 0,

    /// Definitely true
    True = 1,
}

impl TernaryValue {
    /// Parse a raw integer, rejecting anything outside {-1, 0, 1}
    pub fn from_raw(raw: i64) -> Result<Self, ValidationError> {
        match raw {
            -1 => Ok(TernaryValue::False),
            0 => Ok(TernaryValue::Unknown),
            1 => Ok(TernaryValue::True),
            other => Err(ValidationError::InvalidTernaryValue(other)),
        }
    }

    /// Arithmetic encoding of the value
    pub fn as_i8(self) -> i8 {
        self as i8
    }

    /// TRUE and FALSE are definite; UNKNOWN is not
    pub fn is_definite(self) -> bool {
        self != TernaryValue::Unknown
    }

    /// Kleene conjunction: `min(a, b)`
    pub fn and(self, other: Self) -> Self {
        self.min(other)
    }

    /// Kleene disjunction: `max(a, b)`
    pub fn or(self, other: Self) -> Self {
        self.max(other)
    }

    /// Kleene negation: `-a`
    pub fn negate(self) -> Self {
        match self {
            TernaryValue::False => TernaryValue::True,
            TernaryValue::Unknown => TernaryValue::Unknown,
            TernaryValue::True => TernaryValue::False,
        }
    }

    /// Kleene equivalence: `a × b`
    pub fn equiv(self, other: Self) -> Self {
        match self.as_i8() * other.as_i8() {
            -1 => TernaryValue::False,
            0 => TernaryValue::Unknown,
            _ => TernaryValue::True,
        }
    }

    /// Kleene implication: `¬a ∨ b`, i.e. `max(-a, b)`
    pub fn imply(self, other: Self) -> Self {
        self.negate().or(other)
    }

    /// Single-letter symbol (`T`, `U`, `F`)
    pub fn symbol(self) -> &'static str {
        match self {
            TernaryValue::False => "F",
            TernaryValue::Unknown => "U",
            TernaryValue::True => "T",
        }
    }
}

impl std::ops::Not for TernaryValue {
    type Output = TernaryValue;

    fn not(self) -> Self::Output {
        self.negate()
    }
}

impl TryFrom<i64> for TernaryValue {
    type Error = ValidationError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

impl From<TernaryValue> for i64 {
    fn from(value: TernaryValue) -> Self {
        i64::from(value.as_i8())
    }
}

impl fmt::Display for TernaryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Logical connective applied by the evaluators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicOperator {
    /// Conjunction (∧)
    And,

    /// Disjunction (∨)
    Or,

    /// Negation (¬)
    Not,
}

impl LogicOperator {
    /// Get the operator name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicOperator::And => "and",
            LogicOperator::Or => "or",
            LogicOperator::Not => "not",
        }
    }

    /// Parse an operator from its name or symbol (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "and" | "∧" => Some(LogicOperator::And),
            "or" | "∨" => Some(LogicOperator::Or),
            "not" | "¬" => Some(LogicOperator::Not),
            _ => None,
        }
    }

    /// Mathematical symbol for the operator
    pub fn symbol(&self) -> &'static str {
        match self {
            LogicOperator::And => "∧",
            LogicOperator::Or => "∨",
            LogicOperator::Not => "¬",
        }
    }

    /// The value that fixes the result once seen (FALSE for AND, TRUE for OR)
    pub fn absorbing_element(&self) -> Option<TernaryValue> {
        match self {
            LogicOperator::And => Some(TernaryValue::False),
            LogicOperator::Or => Some(TernaryValue::True),
            LogicOperator::Not => None,
        }
    }

    /// Apply the operator to a head value and the already-combined rest.
    ///
    /// NOT is unary: it negates `head` and ignores `rest`.
    pub fn apply(&self, head: TernaryValue, rest: TernaryValue) -> TernaryValue {
        match self {
            LogicOperator::And => head.and(rest),
            LogicOperator::Or => head.or(rest),
            LogicOperator::Not => head.negate(),
        }
    }
}

impl std::str::FromStr for LogicOperator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid operator: {}", s))
    }
}

impl fmt::Display for LogicOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
