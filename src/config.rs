//! TOML configuration loading and validation.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Rebalancing policy knobs.
///
/// ```toml
/// weight_tolerance = 1e-6
/// min_trade_value = 0.0
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RebalanceConfig {
    /// How far the target weights may sum away from 1.0 before a warning is logged.
    #[serde(default = "default_weight_tolerance")]
    pub weight_tolerance: f64,
    /// Value differences at or below this amount (in currency units) are
    /// treated as balanced. Zero means only an exact match is skipped.
    #[serde(default)]
    pub min_trade_value: f64,
}

fn default_weight_tolerance() -> f64 {
    1e-6
}

impl Default for RebalanceConfig {
    fn default() -> Self {
        Self {
            weight_tolerance: default_weight_tolerance(),
            min_trade_value: 0.0,
        }
    }
}

impl RebalanceConfig {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate a TOML string.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let config: RebalanceConfig = toml::from_str(toml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate config invariants.
    pub fn validate(&self) -> Result<()> {
        if !self.weight_tolerance.is_finite() || self.weight_tolerance < 0.0 {
            return Err(Error::Config(format!(
                "weight_tolerance must be >= 0 and finite, got {}",
                self.weight_tolerance
            )));
        }
        if !self.min_trade_value.is_finite() || self.min_trade_value < 0.0 {
            return Err(Error::Config(format!(
                "min_trade_value must be >= 0 and finite, got {}",
                self.min_trade_value
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let config = RebalanceConfig::from_toml_str(
            r#"
weight_tolerance = 0.001
min_trade_value = 25.0
"#,
        )
        .unwrap();
        assert_eq!(config.weight_tolerance, 0.001);
        assert_eq!(config.min_trade_value, 25.0);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = RebalanceConfig::from_toml_str("").unwrap();
        assert_eq!(config, RebalanceConfig::default());
        assert_eq!(config.weight_tolerance, 1e-6);
        assert_eq!(config.min_trade_value, 0.0);
    }

    #[test]
    fn reject_unknown_field() {
        let err = RebalanceConfig::from_toml_str("max_leverage = 2.0").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn validate_catches_negative_tolerance() {
        let err = RebalanceConfig::from_toml_str("weight_tolerance = -0.1").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn validate_catches_nan_min_trade() {
        let config = RebalanceConfig {
            min_trade_value: f64::NAN,
            ..RebalanceConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rebalance.toml");
        std::fs::write(&path, "min_trade_value = 1.0\n").unwrap();
        let config = RebalanceConfig::load(&path).unwrap();
        assert_eq!(config.min_trade_value, 1.0);
    }

    #[test]
    fn load_missing_file() {
        let err = RebalanceConfig::load(Path::new("/nonexistent/rebalance.toml")).unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
    }
}
