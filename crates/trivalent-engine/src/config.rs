//! Configuration for the evaluator
//!
//! Controls instrumentation and the tolerance used when comparing modes.

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default absolute tolerance for confidence agreement between modes
pub const DEFAULT_AGREEMENT_TOLERANCE: f64 = 1e-6;

/// Configuration for an [`Evaluator`](crate::Evaluator)
///
/// # Examples
///
/// ```
/// use trivalent_engine::EvaluatorConfig;
///
/// let config = EvaluatorConfig::default();
/// assert!(config.record_timing);
/// assert!(!config.trace_short_circuits);
///
/// let config = EvaluatorConfig::diagnostic();
/// assert!(config.trace_short_circuits);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    /// Measure wall-clock time per evaluation
    /// Default: true. When false, time totals stay at zero and speedup reports 0.
    #[serde(default = "default_record_timing")]
    pub record_timing: bool,

    /// Emit a trace event every time the optimized walk skips a subtree
    /// Default: false
    #[serde(default)]
    pub trace_short_circuits: bool,

    /// Absolute tolerance when comparing optimized and naive confidences
    /// Default: 1e-6
    #[serde(default = "default_agreement_tolerance")]
    pub agreement_tolerance: f64,
}

fn default_record_timing() -> bool {
    true
}

fn default_agreement_tolerance() -> f64 {
    DEFAULT_AGREEMENT_TOLERANCE
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            record_timing: true,
            trace_short_circuits: false,
            agreement_tolerance: DEFAULT_AGREEMENT_TOLERANCE,
        }
    }
}

impl EvaluatorConfig {
    /// Benchmarking preset: timing on, no per-node tracing
    pub fn benchmark() -> Self {
        Self::default()
    }

    /// Diagnostic preset: timing on, every short-circuit traced
    pub fn diagnostic() -> Self {
        Self {
            trace_short_circuits: true,
            ..Self::default()
        }
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: EvaluatorConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..1.0).contains(&self.agreement_tolerance) {
            tracing::warn!(
                "Rejecting agreement_tolerance {} (must be in [0, 1))",
                self.agreement_tolerance
            );
            return Err(ConfigError::Invalid(format!(
                "agreement_tolerance must be in [0, 1), got {}",
                self.agreement_tolerance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EvaluatorConfig::default();
        assert!(config.record_timing);
        assert!(!config.trace_short_circuits);
        assert_eq!(config.agreement_tolerance, 1e-6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets() {
        assert_eq!(EvaluatorConfig::benchmark(), EvaluatorConfig::default());
        let diagnostic = EvaluatorConfig::diagnostic();
        assert!(diagnostic.trace_short_circuits);
        assert!(diagnostic.record_timing);
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            record_timing = false
            trace_short_circuits = true
            agreement_tolerance = 0.001
        "#;

        let config = EvaluatorConfig::from_toml(toml).unwrap();
        assert!(!config.record_timing);
        assert!(config.trace_short_circuits);
        assert_eq!(config.agreement_tolerance, 0.001);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = EvaluatorConfig::from_toml("trace_short_circuits = true").unwrap();
        assert!(config.record_timing);
        assert_eq!(config.agreement_tolerance, DEFAULT_AGREEMENT_TOLERANCE);

        let config = EvaluatorConfig::from_toml("").unwrap();
        assert_eq!(config, EvaluatorConfig::default());
    }

    #[test]
    fn test_invalid_tolerance_rejected() {
        let result = EvaluatorConfig::from_toml("agreement_tolerance = 1.5");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let result = EvaluatorConfig::from_toml("agreement_tolerance = -0.1");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_toml() {
        let result = EvaluatorConfig::from_toml("record_timing = \"yes\"");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("evaluator.toml");
        std::fs::write(&path, "record_timing = false\n").unwrap();

        let config = EvaluatorConfig::from_file(&path).unwrap();
        assert!(!config.record_timing);

        let missing = EvaluatorConfig::from_file(dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(ConfigError::FileRead(_))));
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = EvaluatorConfig::diagnostic();
        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: EvaluatorConfig = serde_json::from_str(&serialized).unwrap();

        assert_eq!(config, deserialized);
    }
}
