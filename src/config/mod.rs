//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → WalkthroughConfig (validated, immutable)
//!
//! environment (.env + process env)
//!     → env.rs (operator credentials, fail fast)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow running without a config file
//! - Credentials never come from the config file
//! - Validation separates syntactic (serde) from semantic checks

pub mod env;
pub mod loader;
pub mod schema;
pub mod validation;

pub use env::Credentials;
pub use loader::{load_config, load_or_default, ConfigError};
pub use schema::{LogFormat, Network, WalkthroughConfig};
pub use validation::{validate_config, validate_transfer_amount, validate_walkthrough, ValidationError};
