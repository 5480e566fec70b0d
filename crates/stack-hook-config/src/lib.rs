//! Stack Hook Config
//!
//! Process-wide settings for the lifecycle handler. The configuration is read
//! once when the process starts and then handed by value to whatever needs it;
//! nothing reads the environment after that.
//!
//! Recognized variables:
//! - `AWS_REGION`: region for the workflow invoker client
//! - `LOOP_LIMIT`: iteration limit forwarded to the started workflow

mod error;

pub use error::ConfigError;

/// Environment variable holding the invoker region.
pub const REGION_VAR: &str = "AWS_REGION";

/// Environment variable holding the workflow iteration limit.
pub const LOOP_LIMIT_VAR: &str = "LOOP_LIMIT";

/// Configuration for the lifecycle handler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookConfig {
  /// Region for the invoker client. `None` defers to the SDK's region chain.
  pub region: Option<String>,

  /// Iteration limit passed through to the started workflow, as configured.
  /// Parsed by [`HookConfig::loop_limit`] when a workflow is started, so a
  /// bad value fails that event rather than the whole process.
  pub loop_limit: Option<String>,
}

impl HookConfig {
  /// Load configuration from the process environment.
  pub fn from_env() -> Self {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Load configuration through an arbitrary key lookup.
  ///
  /// Empty values are treated the same as absent ones.
  pub fn from_lookup<F>(lookup: F) -> Self
  where
    F: Fn(&str) -> Option<String>,
  {
    let read = |key: &str| {
      lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
    };

    Self {
      region: read(REGION_VAR),
      loop_limit: read(LOOP_LIMIT_VAR),
    }
  }

  /// The iteration limit as a number. `None` when it is not configured.
  pub fn loop_limit(&self) -> Result<Option<u32>, ConfigError> {
    self
      .loop_limit
      .as_deref()
      .map(|value| {
        value.parse::<u32>().map_err(|e| ConfigError::InvalidValue {
          key: LOOP_LIMIT_VAR.to_string(),
          value: value.to_string(),
          message: e.to_string(),
        })
      })
      .transpose()
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use super::*;

  fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
      .iter()
      .map(|(k, v)| (k.to_string(), v.to_string()))
      .collect();
    move |key| map.get(key).cloned()
  }

  #[test]
  fn test_reads_region_and_loop_limit() {
    let config = HookConfig::from_lookup(lookup(&[("AWS_REGION", "eu-west-1"), ("LOOP_LIMIT", "25")]));

    assert_eq!(config.region.as_deref(), Some("eu-west-1"));
    assert_eq!(config.loop_limit.as_deref(), Some("25"));
    assert_eq!(config.loop_limit().unwrap(), Some(25));
  }

  #[test]
  fn test_missing_values_are_none() {
    let config = HookConfig::from_lookup(lookup(&[]));
    assert_eq!(config, HookConfig::default());
    assert_eq!(config.loop_limit().unwrap(), None);
  }

  #[test]
  fn test_blank_values_are_none() {
    let config = HookConfig::from_lookup(lookup(&[("AWS_REGION", ""), ("LOOP_LIMIT", "  ")]));

    assert!(config.region.is_none());
    assert!(config.loop_limit.is_none());
  }

  #[test]
  fn test_non_numeric_loop_limit_loads_but_does_not_parse() {
    let config = HookConfig::from_lookup(lookup(&[("LOOP_LIMIT", "ten")]));
    assert_eq!(config.loop_limit.as_deref(), Some("ten"));

    match config.loop_limit().unwrap_err() {
      ConfigError::InvalidValue { key, value, .. } => {
        assert_eq!(key, "LOOP_LIMIT");
        assert_eq!(value, "ten");
      }
    }
  }

  #[test]
  fn test_negative_or_exponent_loop_limit_is_rejected() {
    for raw in ["-1", "1e3"] {
      let config = HookConfig::from_lookup(lookup(&[("LOOP_LIMIT", raw)]));
      assert!(config.loop_limit().is_err(), "{raw} should not parse");
    }
  }
}
