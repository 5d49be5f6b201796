//! The account walkthrough: create, inspect, transfer, price, inspect again.
//!
//! # Responsibilities
//! - One thin wrapper per remote step, each a single `LedgerClient` call
//! - The fixed sequence tying the steps together
//! - One human-readable status line per step
//!
//! # Design Decisions
//! - Steps run strictly in order; the first error ends the run
//! - Nothing is retried here; whatever the SDK does internally is all there is
//! - Status lines go to a caller-supplied writer so stdout stays the only
//!   console contract and tests can capture it

use serde::Serialize;
use std::io::Write;
use tracing::Instrument;
use uuid::Uuid;

use crate::config::schema::AmountsConfig;
use crate::error::{AppError, AppResult};
use crate::ledger::{AccountId, LedgerClient, LedgerResult, Tinybars, TransferReceipt, TransferSubmission};

/// Amounts used by a full run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkthroughSettings {
    pub initial_balance: Tinybars,
    pub transfer_amount: Tinybars,
}

impl From<&AmountsConfig> for WalkthroughSettings {
    fn from(config: &AmountsConfig) -> Self {
        Self {
            initial_balance: Tinybars(config.initial_balance_tinybars),
            transfer_amount: Tinybars(config.transfer_amount_tinybars),
        }
    }
}

impl Default for WalkthroughSettings {
    fn default() -> Self {
        Self::from(&AmountsConfig::default())
    }
}

/// Everything a full run observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalkthroughReport {
    pub run_id: Uuid,
    pub operator: AccountId,
    pub new_account: AccountId,
    pub initial_balance: Tinybars,
    pub transfer: TransferReceipt,
    pub transfer_amount: Tinybars,
    pub balance_query_cost: Tinybars,
    pub final_balance: Tinybars,
}

/// Create a new account funded with `initial_balance`.
pub async fn create_account<C>(client: &C, initial_balance: Tinybars) -> LedgerResult<AccountId>
where
    C: LedgerClient + ?Sized,
{
    let account_id = client.create_account(initial_balance).await?;
    tracing::info!(account_id = %account_id, initial_balance = initial_balance.get(), "Account created");
    Ok(account_id)
}

pub async fn account_balance<C>(client: &C, account: &AccountId) -> LedgerResult<Tinybars>
where
    C: LedgerClient + ?Sized,
{
    let balance = client.balance(account).await?;
    tracing::debug!(account_id = %account, tinybars = balance.get(), "Balance queried");
    Ok(balance)
}

/// Submit a transfer of `amount` from `from` to `to`.
pub async fn transfer_money<C>(
    client: &C,
    from: &AccountId,
    to: &AccountId,
    amount: Tinybars,
) -> LedgerResult<TransferSubmission>
where
    C: LedgerClient + ?Sized,
{
    let submission = client.transfer(from, to, amount).await?;
    tracing::info!(
        from = %from,
        to = %to,
        tinybars = amount.get(),
        transaction_id = %submission.transaction_id,
        "Transfer submitted"
    );
    Ok(submission)
}

/// Submit a transfer, print its transaction ID, then wait for the receipt.
pub async fn transfer_and_get_receipt<C, W>(
    client: &C,
    from: &AccountId,
    to: &AccountId,
    amount: Tinybars,
    out: &mut W,
) -> AppResult<TransferReceipt>
where
    C: LedgerClient + ?Sized,
    W: Write + ?Sized,
{
    let submission = transfer_money(client, from, to, amount).await?;
    writeln!(
        out,
        "transfer transaction from {} to {}: {}",
        from, to, submission.transaction_id
    )?;

    let receipt = client.receipt(&submission).await?;
    tracing::info!(transaction_id = %receipt.transaction_id, status = %receipt.status, "Transfer finalized");
    Ok(receipt)
}

/// Cost the network charges for a balance query against `account`.
pub async fn balance_query_cost<C>(client: &C, account: &AccountId) -> LedgerResult<Tinybars>
where
    C: LedgerClient + ?Sized,
{
    let cost = client.balance_query_cost(account).await?;
    tracing::debug!(account_id = %account, tinybars = cost.get(), "Query cost fetched");
    Ok(cost)
}

/// Run the full sequence against `client`, paying and receiving as `operator`.
///
/// The new account sends `settings.transfer_amount` back to the operator.
pub async fn run<C, W>(
    client: &C,
    operator: &AccountId,
    settings: WalkthroughSettings,
    out: &mut W,
) -> AppResult<WalkthroughReport>
where
    C: LedgerClient + ?Sized,
    W: Write + ?Sized,
{
    let run_id = Uuid::new_v4();
    let span = tracing::info_span!("walkthrough", %run_id, operator = %operator);

    async move {
        let new_account = create_account(client, settings.initial_balance).await?;
        writeln!(out, "new account ID: {}", new_account)?;

        let initial_balance = account_balance(client, &new_account).await?;
        writeln!(out, "balance: {}", initial_balance)?;

        let transfer = transfer_and_get_receipt(
            client,
            &new_account,
            operator,
            settings.transfer_amount,
            out,
        )
        .await?;
        writeln!(out, "transfer status: {}", transfer.status)?;

        let cost = balance_query_cost(client, &new_account).await?;
        writeln!(out, "cost of balance query: {}", cost)?;

        let final_balance = account_balance(client, &new_account).await?;
        writeln!(out, "balance: {}", final_balance)?;

        tracing::info!(new_account = %new_account, "Walkthrough complete");

        Ok::<_, AppError>(WalkthroughReport {
            run_id,
            operator: *operator,
            new_account,
            initial_balance,
            transfer,
            transfer_amount: settings.transfer_amount,
            balance_query_cost: cost,
            final_balance,
        })
    }
    .instrument(span)
    .await
}
