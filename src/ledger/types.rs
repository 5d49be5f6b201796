//! Ledger-specific types and error definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifier of a ledger account in `shard.realm.num` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountId {
    pub shard: u64,
    pub realm: u64,
    pub num: u64,
}

impl AccountId {
    pub const fn new(shard: u64, realm: u64, num: u64) -> Self {
        Self { shard, realm, num }
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.shard, self.realm, self.num)
    }
}

impl FromStr for AccountId {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LedgerError::InvalidAccountId(s.to_string());

        // Drop an optional "-abcde" checksum suffix.
        let body = s.trim().split('-').next().ok_or_else(invalid)?;
        let mut parts = body.split('.');

        let (Some(shard), Some(realm), Some(num), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        Ok(Self {
            shard: shard.parse().map_err(|_| invalid())?,
            realm: realm.parse().map_err(|_| invalid())?,
            num: num.parse().map_err(|_| invalid())?,
        })
    }
}

impl TryFrom<String> for AccountId {
    type Error = LedgerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AccountId> for String {
    fn from(id: AccountId) -> Self {
        id.to_string()
    }
}

/// Amount in tinybars, the smallest unit of the native currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tinybars(pub i64);

impl Tinybars {
    pub const ZERO: Tinybars = Tinybars(0);

    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for Tinybars {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

impl From<Tinybars> for i64 {
    fn from(amount: Tinybars) -> Self {
        amount.0
    }
}

impl fmt::Display for Tinybars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} tinybars", self.0)
    }
}

/// A transfer that has been submitted but whose receipt has not been read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferSubmission {
    pub transaction_id: String,
}

/// Final outcome of a submitted transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferReceipt {
    pub transaction_id: String,
    pub status: String,
}

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The SDK reported a failure (network, precheck, signing).
    #[error("SDK error: {0}")]
    Sdk(String),

    /// A single SDK call exceeded the configured request timeout.
    #[error("ledger request timed out after {0} seconds")]
    Timeout(u64),

    /// The network finalized the transaction with a non-success status.
    #[error("transaction {transaction_id} failed with status {status}")]
    Rejected {
        transaction_id: String,
        status: String,
    },

    /// Account creation succeeded but the receipt carried no account ID.
    #[error("receipt for {0} did not contain an account ID")]
    MissingAccountId(String),

    /// The operator private key could not be parsed.
    #[error("invalid private key: {0}")]
    InvalidKey(String),

    #[error("invalid account ID '{0}'")]
    InvalidAccountId(String),
}

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;
