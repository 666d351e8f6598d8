//! Validator configuration (environment driven).

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use fruitshop_core::DomainError;

/// Environment variable selecting the [`RebalancePolicy`].
pub const REBALANCE_ENV: &str = "FRUITSHOP_REBALANCE";

/// What to do with a balance record for a fruit that already has stock.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RebalancePolicy {
    /// Replace the stored level.
    #[default]
    Overwrite,
    /// Reject the record with a conflict.
    Reject,
}

impl FromStr for RebalancePolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overwrite" => Ok(Self::Overwrite),
            "reject" => Ok(Self::Reject),
            other => Err(DomainError::validation(format!(
                "unknown rebalance policy '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    pub rebalance: RebalancePolicy,
}

impl ValidatorConfig {
    /// Read configuration from the process environment.
    ///
    /// Unset or invalid values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let rebalance = match lookup(REBALANCE_ENV) {
            None => RebalancePolicy::default(),
            Some(raw) => raw.parse::<RebalancePolicy>().unwrap_or_else(|err| {
                tracing::warn!(env = REBALANCE_ENV, %err, "invalid rebalance policy; using default");
                RebalancePolicy::default()
            }),
        };
        Self { rebalance }
    }
}
