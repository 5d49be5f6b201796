//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! walkthrough. All types derive Serde traits for deserialization from
//! config files; every field has a default so an empty file is valid.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct WalkthroughConfig {
    /// Which network to talk to and how long to wait for it.
    pub network: NetworkConfig,

    /// Amounts used by the walkthrough steps.
    pub walkthrough: AmountsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Network selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Testnet,
    Previewnet,
    Mainnet,
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Network::Testnet => "testnet",
            Network::Previewnet => "previewnet",
            Network::Mainnet => "mainnet",
        };
        f.write_str(name)
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "testnet" => Ok(Network::Testnet),
            "previewnet" => Ok(Network::Previewnet),
            "mainnet" => Ok(Network::Mainnet),
            other => Err(format!("unknown network '{}'", other)),
        }
    }
}

/// Network client configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct NetworkConfig {
    /// Network name.
    pub name: Network,

    /// Upper bound for a single SDK call, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            name: Network::Testnet,
            request_timeout_secs: 60,
        }
    }
}

/// Amounts for account creation and transfer, in tinybars.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AmountsConfig {
    /// Balance the new account is funded with.
    pub initial_balance_tinybars: i64,

    /// Amount sent from the new account back to the operator.
    pub transfer_amount_tinybars: i64,
}

impl Default for AmountsConfig {
    fn default() -> Self {
        Self {
            initial_balance_tinybars: 10_000,
            transfer_amount_tinybars: 1_000,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "hbar_walkthrough=info,warn".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WalkthroughConfig::default();
        assert_eq!(config.network.name, Network::Testnet);
        assert_eq!(config.network.request_timeout_secs, 60);
        assert_eq!(config.walkthrough.initial_balance_tinybars, 10_000);
        assert_eq!(config.walkthrough.transfer_amount_tinybars, 1_000);
        assert_eq!(config.observability.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: WalkthroughConfig = toml::from_str("").unwrap();
        assert_eq!(config, WalkthroughConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config: WalkthroughConfig = toml::from_str(
            r#"
            [network]
            name = "previewnet"

            [walkthrough]
            transfer_amount_tinybars = 250
            "#,
        )
        .unwrap();
        assert_eq!(config.network.name, Network::Previewnet);
        assert_eq!(config.network.request_timeout_secs, 60);
        assert_eq!(config.walkthrough.transfer_amount_tinybars, 250);
        assert_eq!(config.walkthrough.initial_balance_tinybars, 10_000);
    }

    #[test]
    fn test_network_from_str() {
        assert_eq!("MainNet".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!(Network::Previewnet.to_string(), "previewnet");
        assert!("devnet".parse::<Network>().is_err());
    }
}
