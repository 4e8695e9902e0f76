//! Engine configuration: baseline figures and the two behavioural switches.

use scenario_core::{validate_baseline, BaselineMetrics, ValidationError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// How a scenario parameter resolves when it is missing or zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterPolicy {
    /// Only a missing key takes the default. An explicit 0 is used as given.
    #[default]
    Presence,
    /// A missing key and an explicit 0 both take the default.
    Falsy,
}

/// Which scenarios decide the augmentation blocks that run after dispatch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AugmentationScope {
    /// Only the first scenario's type counts. Other families present later in
    /// the list get no augmentation.
    #[default]
    FirstScenario,
    /// Every family present anywhere in the list is augmented once.
    AllScenarioTypes,
}

/// Full engine configuration. Every field has a default, so an empty YAML
/// document yields [`EngineConfig::default`]. Unknown keys are rejected.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub baseline: BaselineMetrics,
    pub parameter_policy: ParameterPolicy,
    pub augmentation: AugmentationScope,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid baseline: {0}")]
    Invalid(#[from] ValidationError),
    #[error("config parse error: {0}")]
    Parse(String),
    #[error("io error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e.to_string())
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(e: serde_yaml::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}

impl EngineConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        // serde_yaml treats an empty document as unit, not an empty map
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: EngineConfig = serde_yaml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_baseline(&self.baseline)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_is_default() {
        let cfg = EngineConfig::from_yaml_str("").unwrap();
        assert_eq!(cfg, EngineConfig::default());
        assert_eq!(cfg.parameter_policy, ParameterPolicy::Presence);
        assert_eq!(cfg.augmentation, AugmentationScope::FirstScenario);
    }

    #[test]
    fn partial_yaml_keeps_remaining_defaults() {
        let cfg = EngineConfig::from_yaml_str(
            "baseline:\n  total_cost: 1000000\nparameter_policy: falsy\n",
        )
        .unwrap();
        assert_eq!(cfg.baseline.total_cost, 1_000_000.0);
        assert_eq!(cfg.baseline.service_level, 94.0);
        assert_eq!(cfg.parameter_policy, ParameterPolicy::Falsy);
        assert_eq!(cfg.augmentation, AugmentationScope::FirstScenario);
    }

    #[test]
    fn augmentation_scope_parses() {
        let cfg = EngineConfig::from_yaml_str("augmentation: all_scenario_types").unwrap();
        assert_eq!(cfg.augmentation, AugmentationScope::AllScenarioTypes);
    }

    #[test]
    fn rejects_zero_total_cost() {
        let err = EngineConfig::from_yaml_str("baseline:\n  total_cost: 0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(ValidationError::NonPositiveCost)
        ));
    }

    #[test]
    fn rejects_misspelled_keys() {
        let err = EngineConfig::from_yaml_str("augmentaton: all_scenario_types").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        let err = EngineConfig::from_yaml_str("baseline:\n  totl_cost: 5\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_unknown_policy() {
        let err = EngineConfig::from_yaml_str("parameter_policy: sometimes").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
