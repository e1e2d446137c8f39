//! Expression trees over the Kleene domain
//!
//! A strict tree of four node kinds. Every child is owned by exactly one
//! parent, so there is no sharing and no cycles. Atoms are the only nodes
//! carrying data and they are validated when built, so any tree that exists
//! is valid to evaluate.

use std::fmt;
use trivalent_domain::{validation, Confidence, LogicOperator, TernaryValue, ValidationError};

/// A ternary value together with the confidence attached to it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Proposition {
    value: TernaryValue,
    confidence: Confidence,
}

impl Proposition {
    /// Create a proposition.
    ///
    /// TRUE and FALSE must carry confidence exactly 1.0 (or none, which
    /// means 1.0). UNKNOWN without a confidence defaults to 0.5.
    pub fn new(value: TernaryValue, confidence: Option<f64>) -> Result<Self, ValidationError> {
        let confidence = match confidence {
            Some(raw) => validation::paired_confidence(value, raw)?,
            None if value.is_definite() => Confidence::CERTAIN,
            None => Confidence::UNKNOWN_DEFAULT,
        };
        Ok(Self { value, confidence })
    }

    /// Create a proposition from a raw ternary integer
    pub fn from_raw(raw: i64, confidence: Option<f64>) -> Result<Self, ValidationError> {
        Self::new(validation::ternary(raw)?, confidence)
    }

    /// A definite value with full confidence
    pub fn certain(value: bool) -> Self {
        Self {
            value: if value { TernaryValue::True } else { TernaryValue::False },
            confidence: Confidence::CERTAIN,
        }
    }

    /// Get the ternary value
    pub fn value(&self) -> TernaryValue {
        self.value
    }

    /// Get the confidence
    pub fn confidence(&self) -> Confidence {
        self.confidence
    }
}

impl fmt::Display for Proposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.value, self.confidence)
    }
}

/// Logical expression tree
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Leaf holding a validated proposition
    Atomic(Proposition),

    /// Kleene AND of two subtrees
    Conjunction(Box<Expression>, Box<Expression>),

    /// Kleene OR of two subtrees
    Disjunction(Box<Expression>, Box<Expression>),

    /// Kleene NOT of one subtree
    Negation(Box<Expression>),
}

impl Expression {
    /// Build an atom from a raw ternary integer and optional confidence
    pub fn atom(raw: i64, confidence: Option<f64>) -> Result<Self, ValidationError> {
        Proposition::from_raw(raw, confidence).map(Expression::Atomic)
    }

    /// Build an atom from a typed value and optional confidence
    pub fn atomic(value: TernaryValue, confidence: Option<f64>) -> Result<Self, ValidationError> {
        Proposition::new(value, confidence).map(Expression::Atomic)
    }

    /// `left ∧ right`
    pub fn conjunction(left: Expression, right: Expression) -> Self {
        Expression::Conjunction(Box::new(left), Box::new(right))
    }

    /// `left ∨ right`
    pub fn disjunction(left: Expression, right: Expression) -> Self {
        Expression::Disjunction(Box::new(left), Box::new(right))
    }

    /// `¬operand`
    pub fn negation(operand: Expression) -> Self {
        Expression::Negation(Box::new(operand))
    }

    /// `antecedent → consequent`, expressed as `¬antecedent ∨ consequent`
    pub fn implies(antecedent: Expression, consequent: Expression) -> Self {
        Self::disjunction(Self::negation(antecedent), consequent)
    }

    /// Fold operands into a left-deep tree: `((a op b) op c) ...`
    ///
    /// NOT takes exactly one operand.
    pub fn chain(
        operator: LogicOperator,
        operands: Vec<Expression>,
    ) -> Result<Self, ValidationError> {
        let mut operands = operands.into_iter();
        let Some(first) = operands.next() else {
            return Err(ValidationError::EmptyInputSequence);
        };

        match operator {
            LogicOperator::And => Ok(operands.fold(first, Self::conjunction)),
            LogicOperator::Or => Ok(operands.fold(first, Self::disjunction)),
            LogicOperator::Not => {
                let extra = operands.count();
                if extra > 0 {
                    return Err(ValidationError::InvalidArity {
                        operator,
                        expected: 1,
                        actual: extra + 1,
                    });
                }
                Ok(Self::negation(first))
            }
        }
    }

    /// Build atoms from parallel raw values and confidences, then chain them
    pub fn chain_raw(
        operator: LogicOperator,
        values: &[i64],
        confidences: &[f64],
    ) -> Result<Self, ValidationError> {
        if values.len() != confidences.len() {
            return Err(ValidationError::MismatchedLengths {
                values: values.len(),
                confidences: confidences.len(),
            });
        }
        let atoms = values
            .iter()
            .zip(confidences)
            .map(|(&v, &c)| Self::atom(v, Some(c)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::chain(operator, atoms)
    }

    /// Number of nodes on the longest root-to-leaf path
    pub fn depth(&self) -> usize {
        match self {
            Expression::Atomic(_) => 1,
            Expression::Conjunction(left, right) | Expression::Disjunction(left, right) => {
                1 + left.depth().max(right.depth())
            }
            Expression::Negation(operand) => 1 + operand.depth(),
        }
    }

    /// Number of atoms in the tree (the naive evaluation count)
    pub fn atom_count(&self) -> usize {
        match self {
            Expression::Atomic(_) => 1,
            Expression::Conjunction(left, right) | Expression::Disjunction(left, right) => {
                left.atom_count() + right.atom_count()
            }
            Expression::Negation(operand) => operand.atom_count(),
        }
    }
}

impl From<Proposition> for Expression {
    fn from(proposition: Proposition) -> Self {
        Expression::Atomic(proposition)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Atomic(p) => write!(f, "{}", p),
            Expression::Conjunction(left, right) => {
                write!(f, "({} {} {})", left, LogicOperator::And, right)
            }
            Expression::Disjunction(left, right) => {
                write!(f, "({} {} {})", left, LogicOperator::Or, right)
            }
            Expression::Negation(operand) => write!(f, "{}{}", LogicOperator::Not, operand),
        }
    }
}
