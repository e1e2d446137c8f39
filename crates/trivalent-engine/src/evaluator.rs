//! Dual-mode expression evaluator with instrumentation

use crate::{
    ConfigError, EvaluationMode, EvaluationResult, EvaluatorConfig, EvaluatorStats, Expression,
    PerformanceSummary,
};
use std::time::{Duration, Instant};
use trivalent_domain::{propagation, Confidence, TernaryValue};

/// Evaluates expression trees and keeps per-mode totals
///
/// Both modes share the same value and confidence rules and must agree on
/// value and confidence for every tree. They differ only in work: optimized
/// mode skips the right subtree once the left one decides the result, naive
/// mode always visits both.
///
/// # Examples
///
/// ```
/// use trivalent_engine::{EvaluationMode, Evaluator, Expression};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let expr = Expression::conjunction(
///     Expression::atom(-1, None)?,
///     Expression::atom(0, Some(0.5))?,
/// );
///
/// let mut evaluator = Evaluator::default_config();
/// let optimized = evaluator.evaluate(&expr, EvaluationMode::Optimized);
/// let naive = evaluator.evaluate(&expr, EvaluationMode::Naive);
///
/// assert_eq!(optimized.value(), naive.value());
/// assert_eq!(optimized.evaluation_count(), 1);
/// assert_eq!(naive.evaluation_count(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Evaluator {
    config: EvaluatorConfig,
    stats: EvaluatorStats,
}

/// Both modes' results for the same tree
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeComparison {
    /// Result of the short-circuiting walk
    pub optimized: EvaluationResult,

    /// Result of the exhaustive walk
    pub naive: EvaluationResult,

    /// Values equal and confidences within the configured tolerance
    pub agrees: bool,
}

impl ModeComparison {
    /// Atom visits avoided by short-circuiting
    pub fn evaluations_saved(&self) -> usize {
        self.naive
            .evaluation_count()
            .saturating_sub(self.optimized.evaluation_count())
    }
}

impl Evaluator {
    /// Create a new Evaluator with the given configuration.
    ///
    /// The configuration is taken as-is. Use [`Evaluator::try_new`] for a
    /// configuration assembled in code that has not been validated.
    pub fn new(config: EvaluatorConfig) -> Self {
        Self {
            config,
            stats: EvaluatorStats::new(),
        }
    }

    /// Create a new Evaluator after validating the configuration
    pub fn try_new(config: EvaluatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Create an Evaluator with default configuration
    pub fn default_config() -> Self {
        Self::new(EvaluatorConfig::default())
    }

    /// Get the configuration
    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Get a reference to the accumulated stats
    pub fn stats(&self) -> &EvaluatorStats {
        &self.stats
    }

    /// Totals and derived ratios since the last reset
    pub fn summary(&self) -> PerformanceSummary {
        self.stats.summary()
    }

    /// Reset stats counters
    pub fn reset_stats(&mut self) {
        tracing::info!(
            "Resetting evaluator stats (optimized: {} evaluations, naive: {} evaluations)",
            self.stats.evaluations(EvaluationMode::Optimized),
            self.stats.evaluations(EvaluationMode::Naive)
        );
        self.stats.reset();
    }

    /// Evaluate `expression` in `mode` and add the work to the running totals
    pub fn evaluate(&mut self, expression: &Expression, mode: EvaluationMode) -> EvaluationResult {
        let start = self.config.record_timing.then(Instant::now);

        let walk = Walk {
            trace_short_circuits: self.config.trace_short_circuits,
        };
        let result = match mode {
            EvaluationMode::Optimized => walk.optimized(expression),
            EvaluationMode::Naive => walk.naive(expression),
        };

        let elapsed = start.map(|s| s.elapsed()).unwrap_or(Duration::ZERO);
        self.stats.record(mode, result.evaluation_count(), elapsed);

        tracing::debug!(
            "Evaluated {} in {} mode: {} (confidence {:.4}, {} evaluations, {}us)",
            expression,
            mode,
            result.value(),
            result.confidence(),
            result.evaluation_count(),
            elapsed.as_micros()
        );

        result
    }

    /// Evaluate in both modes and check that they agree.
    ///
    /// Both runs are added to the stats.
    pub fn compare(&mut self, expression: &Expression) -> ModeComparison {
        let optimized = self.evaluate(expression, EvaluationMode::Optimized);
        let naive = self.evaluate(expression, EvaluationMode::Naive);
        let agrees = optimized.agrees_with(&naive, self.config.agreement_tolerance);

        if !agrees {
            tracing::warn!(
                "Mode disagreement on {}: optimized {} ({}), naive {} ({})",
                expression,
                optimized.value(),
                optimized.confidence(),
                naive.value(),
                naive.confidence()
            );
        }

        ModeComparison {
            optimized,
            naive,
            agrees,
        }
    }
}

/// One tree walk; stateless apart from tracing flags
struct Walk {
    trace_short_circuits: bool,
}

impl Walk {
    fn optimized(&self, expression: &Expression) -> EvaluationResult {
        match expression {
            Expression::Atomic(p) => EvaluationResult::from_parts(p.value(), p.confidence(), 1),
            Expression::Conjunction(left, right) => {
                let left = self.optimized(left);
                if left.value() == TernaryValue::False {
                    self.short_circuit("conjunction", TernaryValue::False);
                    return decided(TernaryValue::False, left.evaluation_count());
                }
                conjoin(left, self.optimized(right))
            }
            Expression::Disjunction(left, right) => {
                let left = self.optimized(left);
                if left.value() == TernaryValue::True {
                    self.short_circuit("disjunction", TernaryValue::True);
                    return decided(TernaryValue::True, left.evaluation_count());
                }
                disjoin(left, self.optimized(right))
            }
            Expression::Negation(operand) => negate(self.optimized(operand)),
        }
    }

    fn naive(&self, expression: &Expression) -> EvaluationResult {
        match expression {
            Expression::Atomic(p) => EvaluationResult::from_parts(p.value(), p.confidence(), 1),
            Expression::Conjunction(left, right) => conjoin(self.naive(left), self.naive(right)),
            Expression::Disjunction(left, right) => disjoin(self.naive(left), self.naive(right)),
            Expression::Negation(operand) => negate(self.naive(operand)),
        }
    }

    /// Runs inside the timed window, so the skipped subtree stays untouched
    fn short_circuit(&self, node: &str, value: TernaryValue) {
        if self.trace_short_circuits {
            tracing::trace!("Short-circuit {} on {}: right operand skipped", node, value);
        }
    }
}

/// Result fixed by an absorbing left operand; the negative (or positive)
/// branch is exact, so confidence is 1.0
fn decided(value: TernaryValue, evaluation_count: usize) -> EvaluationResult {
    EvaluationResult::from_parts(value, Confidence::CERTAIN, evaluation_count)
}

fn conjoin(left: EvaluationResult, right: EvaluationResult) -> EvaluationResult {
    let value = left.value().and(right.value());
    let count = left.evaluation_count() + right.evaluation_count();
    if value == TernaryValue::False {
        return decided(value, count);
    }
    let confidence = propagation::and_pair(left.confidence_score(), right.confidence_score());
    EvaluationResult::from_parts(value, confidence, count)
}

fn disjoin(left: EvaluationResult, right: EvaluationResult) -> EvaluationResult {
    let value = left.value().or(right.value());
    let count = left.evaluation_count() + right.evaluation_count();
    if value == TernaryValue::True {
        return decided(value, count);
    }
    let confidence = propagation::or_pair(left.confidence_score(), right.confidence_score());
    EvaluationResult::from_parts(value, confidence, count)
}

fn negate(operand: EvaluationResult) -> EvaluationResult {
    EvaluationResult::from_parts(
        operand.value().negate(),
        propagation::negation(operand.confidence_score()),
        operand.evaluation_count(),
    )
}
