//! Simulation settings.

use crate::error::{PayoffError, Result};
use std::env;

/// Environment variable overriding [`SimulationConfig::max_months`].
pub const MAX_MONTHS_VAR: &str = "PAYOFF_MAX_MONTHS";

/// Settings for a payoff run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Upper bound on simulated months before the run is abandoned.
    pub max_months: u32,
}

impl SimulationConfig {
    /// One hundred years.
    pub const DEFAULT_MAX_MONTHS: u32 = 1200;

    /// Reads overrides from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        match env::var(MAX_MONTHS_VAR) {
            Ok(raw) => Self::default().with_max_months_str(&raw),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(e) => Err(PayoffError::InvalidConfig(format!("{}: {}", MAX_MONTHS_VAR, e))),
        }
    }

    fn with_max_months_str(self, raw: &str) -> Result<Self> {
        match raw.trim().parse::<u32>() {
            Ok(max_months) if max_months > 0 => Ok(SimulationConfig { max_months }),
            _ => Err(PayoffError::InvalidConfig(format!(
                "{} must be a positive integer, got '{}'",
                MAX_MONTHS_VAR, raw
            ))),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            max_months: Self::DEFAULT_MAX_MONTHS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_max_months() {
        assert_eq!(SimulationConfig::default().max_months, 1200);
    }

    #[test]
    fn test_parse_max_months() {
        let config = SimulationConfig::default().with_max_months_str(" 360 ").unwrap();
        assert_eq!(config.max_months, 360);
    }

    #[test]
    fn test_rejects_zero_and_garbage() {
        let base = SimulationConfig::default();
        assert!(matches!(
            base.with_max_months_str("0"),
            Err(PayoffError::InvalidConfig(_))
        ));
        assert!(base.with_max_months_str("forever").is_err());
        assert!(base.with_max_months_str("-5").is_err());
    }
}
