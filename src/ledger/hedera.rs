//! `LedgerClient` backed by the Hedera SDK.
//!
//! # Responsibilities
//! - Build the SDK client for the configured network and set the operator
//! - Translate between crate types and SDK types
//! - Bound every SDK call with the configured request timeout
//! - Remember keys generated for new accounts so their transfers can be signed
//! - Keep submitted transfers so their receipts come from the submitting node

use async_trait::async_trait;
use dashmap::DashMap;
use hedera::{
    AccountBalanceQuery, AccountCreateTransaction, Client, Hbar, PrivateKey, Status,
    TransactionId, TransactionReceiptQuery, TransactionResponse, TransferTransaction,
};
use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;

use crate::config::schema::Network;
use crate::config::Credentials;
use crate::ledger::client::LedgerClient;
use crate::ledger::types::{
    AccountId, LedgerError, LedgerResult, Tinybars, TransferReceipt, TransferSubmission,
};

/// Hedera network client with an operator and an in-memory keyring.
pub struct HederaClient {
    client: Client,
    network: Network,
    operator: AccountId,
    /// Private keys of accounts created during this run.
    keyring: DashMap<AccountId, PrivateKey>,
    /// Transfers submitted but not yet asked for a receipt, by transaction ID.
    pending: DashMap<String, TransactionResponse>,
    request_timeout: Duration,
}

impl HederaClient {
    /// Create a client for `network` with `credentials` as the operator.
    ///
    /// No network traffic happens here; the first request is made by the
    /// first trait call.
    pub fn new(
        network: Network,
        credentials: &Credentials,
        request_timeout: Duration,
    ) -> LedgerResult<Self> {
        let operator_key = credentials
            .private_key()
            .strip_prefix("0x")
            .unwrap_or(credentials.private_key())
            .parse::<PrivateKey>()
            .map_err(|e| LedgerError::InvalidKey(e.to_string()))?;

        let client = match network {
            Network::Testnet => Client::for_testnet(),
            Network::Previewnet => Client::for_previewnet(),
            Network::Mainnet => Client::for_mainnet(),
        };
        client.set_operator(to_sdk_account(&credentials.account_id)?, operator_key);

        tracing::info!(
            network = %network,
            operator = %credentials.account_id,
            timeout_secs = request_timeout.as_secs(),
            "Ledger client initialized"
        );

        Ok(Self {
            client,
            network,
            operator: credentials.account_id,
            keyring: DashMap::new(),
            pending: DashMap::new(),
            request_timeout,
        })
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn operator(&self) -> AccountId {
        self.operator
    }

    async fn call<T, F>(&self, op: &'static str, fut: F) -> LedgerResult<T>
    where
        F: Future<Output = Result<T, hedera::Error>> + Send,
    {
        match timeout(self.request_timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                tracing::warn!(op, error = %e, "Ledger call failed");
                Err(LedgerError::Sdk(e.to_string()))
            }
            Err(_) => {
                tracing::warn!(op, "Ledger call timed out");
                Err(LedgerError::Timeout(self.request_timeout.as_secs()))
            }
        }
    }
}

#[async_trait]
impl LedgerClient for HederaClient {
    async fn create_account(&self, initial_balance: Tinybars) -> LedgerResult<AccountId> {
        let key = PrivateKey::generate_ed25519();

        let mut tx = AccountCreateTransaction::new();
        tx.key(key.public_key())
            .initial_balance(Hbar::from_tinybars(initial_balance.get()));

        let response = self.call("create_account", tx.execute(&self.client)).await?;
        let transaction_id = response.transaction_id.to_string();
        let receipt = self
            .call("create_account_receipt", response.get_receipt(&self.client))
            .await?;

        let sdk_id = receipt
            .account_id
            .ok_or_else(|| LedgerError::MissingAccountId(transaction_id.clone()))?;
        let account_id = from_sdk_account(&sdk_id)?;

        self.keyring.insert(account_id, key);
        tracing::debug!(account_id = %account_id, transaction_id = %transaction_id, "Account created");

        Ok(account_id)
    }

    async fn balance(&self, account: &AccountId) -> LedgerResult<Tinybars> {
        let mut query = AccountBalanceQuery::new();
        query.account_id(to_sdk_account(account)?);

        let balance = self.call("balance", query.execute(&self.client)).await?;
        Ok(Tinybars(balance.hbars.to_tinybars()))
    }

    async fn transfer(
        &self,
        from: &AccountId,
        to: &AccountId,
        amount: Tinybars,
    ) -> LedgerResult<TransferSubmission> {
        let mut tx = TransferTransaction::new();
        tx.hbar_transfer(to_sdk_account(from)?, Hbar::from_tinybars(-amount.get()))
            .hbar_transfer(to_sdk_account(to)?, Hbar::from_tinybars(amount.get()));

        // The operator signs every transaction; a sender created in this run
        // must co-sign with its own key.
        let sender_key = self.keyring.get(from).map(|entry| entry.value().clone());
        if let Some(key) = sender_key {
            tx.freeze_with(&self.client)
                .map_err(|e| LedgerError::Sdk(e.to_string()))?
                .sign(key);
        }

        let response = self.call("transfer", tx.execute(&self.client)).await?;
        let transaction_id = response.transaction_id.to_string();
        self.pending.insert(transaction_id.clone(), response);

        Ok(TransferSubmission { transaction_id })
    }

    async fn receipt(&self, submission: &TransferSubmission) -> LedgerResult<TransferReceipt> {
        // Transfers submitted through this client are asked at the node that
        // accepted them; anything else goes through a plain receipt query.
        let mut query = match self.pending.remove(&submission.transaction_id) {
            Some((_, response)) => response.get_receipt_query(),
            None => {
                let transaction_id = submission
                    .transaction_id
                    .parse::<TransactionId>()
                    .map_err(|e| LedgerError::Sdk(e.to_string()))?;
                let mut query = TransactionReceiptQuery::new();
                query.transaction_id(transaction_id);
                query
            }
        };

        let receipt = self.call("receipt", query.execute(&self.client)).await?;
        let status = format!("{:?}", receipt.status);

        if receipt.status != Status::Success {
            return Err(LedgerError::Rejected {
                transaction_id: submission.transaction_id.clone(),
                status,
            });
        }

        Ok(TransferReceipt {
            transaction_id: submission.transaction_id.clone(),
            status,
        })
    }

    async fn balance_query_cost(&self, account: &AccountId) -> LedgerResult<Tinybars> {
        let mut query = AccountBalanceQuery::new();
        query.account_id(to_sdk_account(account)?);

        let cost = self
            .call("balance_query_cost", query.get_cost(&self.client))
            .await?;
        Ok(Tinybars(cost.to_tinybars()))
    }
}

impl std::fmt::Debug for HederaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HederaClient")
            .field("network", &self.network)
            .field("operator", &self.operator)
            .field("accounts_created", &self.keyring.len())
            .field("pending_receipts", &self.pending.len())
            .field("timeout_secs", &self.request_timeout.as_secs())
            .finish()
    }
}

fn to_sdk_account(id: &AccountId) -> LedgerResult<hedera::AccountId> {
    id.to_string()
        .parse::<hedera::AccountId>()
        .map_err(|_| LedgerError::InvalidAccountId(id.to_string()))
}

fn from_sdk_account(id: &hedera::AccountId) -> LedgerResult<AccountId> {
    id.to_string().parse()
}
