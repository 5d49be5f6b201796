//! Ledger integration subsystem.
//!
//! # Data Flow
//! ```text
//! Environment Variables (operator account, private key)
//!     → config::env (credentials)
//!     → hedera.rs (SDK client, operator, request timeouts)
//!     → client.rs (LedgerClient trait consumed by the walkthrough)
//! ```
//!
//! # Security Constraints
//! - Private keys ONLY from environment variables
//! - Never log private keys or sensitive data
//! - Keys generated for new accounts live in memory for the run only

pub mod client;
pub mod hedera;
pub mod types;

pub use client::LedgerClient;
pub use hedera::HederaClient;
pub use types::{
    AccountId, LedgerError, LedgerResult, Tinybars, TransferReceipt, TransferSubmission,
};
