//! Instrumentation collected across evaluations

use crate::EvaluationMode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Running per-mode totals for one evaluator
///
/// Totals accumulate over every `evaluate` call until [`reset`](Self::reset)
/// is called. Each evaluator owns its own stats; nothing is shared between
/// instances.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluatorStats {
    optimized_evaluations: u64,
    naive_evaluations: u64,
    optimized_time: Duration,
    naive_time: Duration,
    optimized_runs: u64,
    naive_runs: u64,
}

impl EvaluatorStats {
    /// Create new empty stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one evaluation in `mode`
    pub fn record(&mut self, mode: EvaluationMode, evaluations: usize, elapsed: Duration) {
        let evaluations = evaluations as u64;
        match mode {
            EvaluationMode::Optimized => {
                self.optimized_evaluations += evaluations;
                self.optimized_time += elapsed;
                self.optimized_runs += 1;
            }
            EvaluationMode::Naive => {
                self.naive_evaluations += evaluations;
                self.naive_time += elapsed;
                self.naive_runs += 1;
            }
        }
    }

    /// Total atoms visited in `mode`
    pub fn evaluations(&self, mode: EvaluationMode) -> u64 {
        match mode {
            EvaluationMode::Optimized => self.optimized_evaluations,
            EvaluationMode::Naive => self.naive_evaluations,
        }
    }

    /// Total wall-clock time spent in `mode`
    pub fn elapsed(&self, mode: EvaluationMode) -> Duration {
        match mode {
            EvaluationMode::Optimized => self.optimized_time,
            EvaluationMode::Naive => self.naive_time,
        }
    }

    /// Number of `evaluate` calls made in `mode`
    pub fn runs(&self, mode: EvaluationMode) -> u64 {
        match mode {
            EvaluationMode::Optimized => self.optimized_runs,
            EvaluationMode::Naive => self.naive_runs,
        }
    }

    /// `(naive - optimized) / naive`, or 0 when nothing ran naively
    pub fn evaluation_reduction(&self) -> f64 {
        if self.naive_evaluations == 0 {
            return 0.0;
        }
        (self.naive_evaluations as f64 - self.optimized_evaluations as f64)
            / self.naive_evaluations as f64
    }

    /// `naive_time / optimized_time`, or 0 when no optimized time was recorded
    pub fn speedup(&self) -> f64 {
        let optimized = self.optimized_time.as_secs_f64();
        if optimized == 0.0 {
            return 0.0;
        }
        self.naive_time.as_secs_f64() / optimized
    }

    /// Reset all totals
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Snapshot of totals and derived ratios
    pub fn summary(&self) -> PerformanceSummary {
        PerformanceSummary {
            optimized_evaluations: self.optimized_evaluations,
            naive_evaluations: self.naive_evaluations,
            evaluation_reduction: self.evaluation_reduction(),
            optimized_time_secs: self.optimized_time.as_secs_f64(),
            naive_time_secs: self.naive_time.as_secs_f64(),
            speedup: self.speedup(),
        }
    }
}

/// Optimized-versus-naive comparison derived from [`EvaluatorStats`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    /// Atoms visited in optimized mode
    pub optimized_evaluations: u64,

    /// Atoms visited in naive mode
    pub naive_evaluations: u64,

    /// Fraction of naive work avoided by short-circuiting
    pub evaluation_reduction: f64,

    /// Seconds spent in optimized mode
    pub optimized_time_secs: f64,

    /// Seconds spent in naive mode
    pub naive_time_secs: f64,

    /// Naive time divided by optimized time
    pub speedup: f64,
}
