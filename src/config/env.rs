//! Operator credentials from the environment.
//!
//! # Security
//! - Credentials are read ONLY from environment variables (or `.env`)
//! - The private key is never logged; `Debug` output redacts it

use std::fmt;

use crate::config::loader::ConfigError;
use crate::ledger::AccountId;

/// Environment variable holding the operator account ID.
pub const ACCOUNT_ID_ENV_VAR: &str = "HEDERA_ACCOUNT_ID";

/// Environment variable holding the operator private key.
pub const PRIVATE_KEY_ENV_VAR: &str = "HEDERA_PRIVATE_KEY";

/// Operator account and key used to pay for and sign transactions.
#[derive(Clone)]
pub struct Credentials {
    pub account_id: AccountId,
    private_key: String,
}

impl Credentials {
    pub fn new(account_id: AccountId, private_key: impl Into<String>) -> Self {
        Self {
            account_id,
            private_key: private_key.into(),
        }
    }

    /// Read credentials from the process environment.
    ///
    /// A `.env` file in the working directory is loaded first; variables
    /// already set in the environment take precedence over it.
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!(error = %e, "Ignoring unreadable .env file"),
        }

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through `lookup`, which maps a variable name to its
    /// value. The account ID is checked before the key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let account_id = required(&lookup, ACCOUNT_ID_ENV_VAR)?;
        let private_key = required(&lookup, PRIVATE_KEY_ENV_VAR)?;

        let account_id = account_id
            .parse::<AccountId>()
            .map_err(|_| ConfigError::InvalidAccountId {
                var: ACCOUNT_ID_ENV_VAR,
                value: account_id.clone(),
            })?;

        Ok(Self {
            account_id,
            private_key,
        })
    }

    pub fn private_key(&self) -> &str {
        &self.private_key
    }
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::MissingVar(name))
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account_id", &self.account_id)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_both_present_and_trimmed() {
        let creds = Credentials::from_lookup(lookup(&[
            (ACCOUNT_ID_ENV_VAR, " 0.0.4821\n"),
            (PRIVATE_KEY_ENV_VAR, "  302e0201  "),
        ]))
        .unwrap();
        assert_eq!(creds.account_id, AccountId::new(0, 0, 4821));
        assert_eq!(creds.private_key(), "302e0201");
    }

    #[test]
    fn test_missing_account_id() {
        let err = Credentials::from_lookup(lookup(&[(PRIVATE_KEY_ENV_VAR, "abc")])).unwrap_err();
        assert_eq!(err.to_string(), "missing HEDERA_ACCOUNT_ID");
    }

    #[test]
    fn test_missing_private_key() {
        let err = Credentials::from_lookup(lookup(&[(ACCOUNT_ID_ENV_VAR, "0.0.1")])).unwrap_err();
        assert_eq!(err.to_string(), "missing HEDERA_PRIVATE_KEY");
    }

    #[test]
    fn test_account_checked_first() {
        let err = Credentials::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(ACCOUNT_ID_ENV_VAR)));
    }

    #[test]
    fn test_blank_counts_as_missing() {
        let err = Credentials::from_lookup(lookup(&[
            (ACCOUNT_ID_ENV_VAR, "0.0.1"),
            (PRIVATE_KEY_ENV_VAR, "   "),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(PRIVATE_KEY_ENV_VAR)));
    }

    #[test]
    fn test_malformed_account_id() {
        let err = Credentials::from_lookup(lookup(&[
            (ACCOUNT_ID_ENV_VAR, "alice"),
            (PRIVATE_KEY_ENV_VAR, "abc"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAccountId { .. }));
    }

    #[test]
    fn test_debug_redacts_key() {
        let creds = Credentials::new(AccountId::new(0, 0, 7), "supersecret");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("supersecret"));
    }
}
