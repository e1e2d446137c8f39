//! Integration tests for trivalent-domain
//!
//! These tests verify the Kleene algebra and confidence propagation through
//! the public API only.

use proptest::prelude::*;
use trivalent_domain::{propagation, validation, Confidence, TernaryValue, ValidationError};

fn ternary() -> impl Strategy<Value = TernaryValue> {
    (-1i64..=1).prop_map(|raw| TernaryValue::from_raw(raw).unwrap())
}

#[test]
fn test_raw_truth_tables() {
    let and = |a, b| {
        let a = validation::ternary(a).unwrap();
        let b = validation::ternary(b).unwrap();
        i64::from(a.and(b))
    };
    let or = |a, b| {
        let a = validation::ternary(a).unwrap();
        let b = validation::ternary(b).unwrap();
        i64::from(a.or(b))
    };

    assert_eq!(and(1, -1), -1);
    assert_eq!(and(1, 0), 0);
    assert_eq!(and(-1, 0), -1);
    assert_eq!(or(1, -1), 1);
    assert_eq!(or(1, 0), 1);
    assert_eq!(or(-1, 0), 0);
}

#[test]
fn test_invalid_raw_value_fails_before_arithmetic() {
    let result = validation::ternary(1).and_then(|a| Ok(a.and(validation::ternary(5)?)));
    assert_eq!(result, Err(ValidationError::InvalidTernaryValue(5)));
}

#[test]
fn test_confidence_rules() {
    let and = propagation::conjunction(&[0.9, 0.8, 0.7]).unwrap();
    let or = propagation::disjunction(&[0.9, 0.8, 0.7]).unwrap();
    assert!((and.value() - 0.504).abs() < 1e-9);
    assert!((or.value() - 0.994).abs() < 1e-9);

    let c = Confidence::new(0.33).unwrap();
    assert_eq!(propagation::negation(c), c);
}

#[test]
fn test_confidence_rule_failures() {
    assert_eq!(
        propagation::conjunction(&[]),
        Err(ValidationError::EmptyConfidenceSet)
    );
    assert_eq!(
        propagation::disjunction(&[0.2, f64::INFINITY]),
        Err(ValidationError::InvalidConfidence(f64::INFINITY))
    );
}

proptest! {
    /// Property: AND is min, OR is max, NOT is arithmetic negation
    #[test]
    fn test_connectives_match_encoding(a in ternary(), b in ternary()) {
        prop_assert_eq!(a.and(b).as_i8(), a.as_i8().min(b.as_i8()));
        prop_assert_eq!(a.or(b).as_i8(), a.as_i8().max(b.as_i8()));
        prop_assert_eq!(a.negate().as_i8(), -a.as_i8());
    }

    /// Property: FALSE absorbs AND, TRUE absorbs OR
    #[test]
    fn test_absorbing_elements(a in ternary()) {
        prop_assert_eq!(TernaryValue::False.and(a), TernaryValue::False);
        prop_assert_eq!(TernaryValue::True.or(a), TernaryValue::True);
    }

    /// Property: double negation is the identity
    #[test]
    fn test_double_negation(a in ternary()) {
        prop_assert_eq!(a.negate().negate(), a);
    }

    /// Property: out-of-domain raw values are always rejected
    #[test]
    fn test_out_of_domain_rejected(raw in any::<i64>().prop_filter("outside domain", |r| !(-1..=1).contains(r))) {
        prop_assert_eq!(
            validation::ternary(raw),
            Err(ValidationError::InvalidTernaryValue(raw))
        );
    }

    /// Property: AND-chains of equal confidence decay geometrically
    #[test]
    fn test_chain_decay(c in 0.0f64..=1.0, n in 1usize..30) {
        let chain = vec![c; n];
        let result = propagation::conjunction(&chain).unwrap().value();
        prop_assert!((result - c.powi(n as i32)).abs() < 1e-12);
    }
}
