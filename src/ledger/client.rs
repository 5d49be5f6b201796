//! The boundary between the walkthrough and the network.
//!
//! # Responsibilities
//! - Expose the five remote operations the walkthrough needs
//! - Keep SDK types out of the rest of the crate
//!
//! # Design Decisions
//! - One async trait, object safe, so a recording double can stand in for
//!   the network in tests
//! - Amounts are forwarded exactly as given; the ledger enforces balances

use async_trait::async_trait;

use crate::ledger::types::{AccountId, LedgerResult, Tinybars, TransferReceipt, TransferSubmission};

#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Generate a fresh key pair and create an account funded with
    /// `initial_balance`. Resolves once the creation receipt is available.
    async fn create_account(&self, initial_balance: Tinybars) -> LedgerResult<AccountId>;

    /// Current balance of `account`.
    async fn balance(&self, account: &AccountId) -> LedgerResult<Tinybars>;

    /// Submit a transfer of `amount` from `from` to `to`.
    async fn transfer(
        &self,
        from: &AccountId,
        to: &AccountId,
        amount: Tinybars,
    ) -> LedgerResult<TransferSubmission>;

    /// Wait for the receipt of a submitted transfer.
    ///
    /// A receipt whose status is not success is returned as
    /// [`LedgerError::Rejected`](crate::ledger::LedgerError::Rejected).
    async fn receipt(&self, submission: &TransferSubmission) -> LedgerResult<TransferReceipt>;

    /// Fee the network charges for a balance query against `account`.
    async fn balance_query_cost(&self, account: &AccountId) -> LedgerResult<Tinybars>;
}
