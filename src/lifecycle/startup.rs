//! Startup orchestration.
//!
//! # Responsibilities
//! - Read operator credentials before anything touches the network
//! - Build the ledger client only once credentials are complete
//!
//! # Design Decisions
//! - The client is produced by a factory so startup order can be checked
//!   without a network

use std::time::Duration;

use crate::config::{Credentials, WalkthroughConfig};
use crate::error::AppResult;
use crate::ledger::{HederaClient, LedgerResult};

/// Read credentials through `lookup`, then hand them to `make_client`.
///
/// `make_client` is never invoked when a credential is missing or malformed.
pub fn connect<L, F, C>(lookup: L, make_client: F) -> AppResult<(Credentials, C)>
where
    L: Fn(&str) -> Option<String>,
    F: FnOnce(&Credentials) -> LedgerResult<C>,
{
    let credentials = Credentials::from_lookup(lookup)?;
    tracing::debug!(operator = %credentials.account_id, "Credentials loaded");

    let client = make_client(&credentials)?;
    Ok((credentials, client))
}

/// Startup for the binary: `.env` and process environment, Hedera client.
pub fn connect_from_env(config: &WalkthroughConfig) -> AppResult<(Credentials, HederaClient)> {
    let credentials = Credentials::from_env()?;
    let client = HederaClient::new(
        config.network.name,
        &credentials,
        Duration::from_secs(config.network.request_timeout_secs),
    )?;
    Ok((credentials, client))
}
