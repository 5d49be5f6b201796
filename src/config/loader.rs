//! Configuration loading from disk.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::WalkthroughConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration and credential loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),

    /// A required environment variable is absent or blank.
    #[error("missing {0}")]
    MissingVar(&'static str),

    #[error("{var} is not a valid account ID: '{value}'")]
    InvalidAccountId { var: &'static str, value: String },
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<WalkthroughConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: WalkthroughConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load `path` if given, otherwise fall back to defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<WalkthroughConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(WalkthroughConfig::default()),
    }
}
