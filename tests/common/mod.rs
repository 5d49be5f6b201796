//! Shared utilities for integration tests.

use async_trait::async_trait;
use std::sync::Mutex;

use hbar_walkthrough::ledger::{
    AccountId, LedgerClient, LedgerError, LedgerResult, Tinybars, TransferReceipt,
    TransferSubmission,
};

/// One call observed by [`RecordingLedger`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreateAccount(Tinybars),
    Balance(AccountId),
    Transfer {
        from: AccountId,
        to: AccountId,
        amount: Tinybars,
    },
    Receipt(String),
    Cost(AccountId),
}

/// In-memory ledger that records every call and keeps simple balances.
pub struct RecordingLedger {
    calls: Mutex<Vec<Call>>,
    balances: Mutex<Vec<(AccountId, i64)>>,
    next_account: Mutex<u64>,
    query_cost: Tinybars,
    reject_transfers_with: Option<&'static str>,
}

impl RecordingLedger {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            balances: Mutex::new(Vec::new()),
            next_account: Mutex::new(5000),
            query_cost: Tinybars(0),
            reject_transfers_with: None,
        }
    }

    #[allow(dead_code)]
    pub fn with_query_cost(mut self, cost: i64) -> Self {
        self.query_cost = Tinybars(cost);
        self
    }

    /// Make every receipt come back with `status`.
    #[allow(dead_code)]
    pub fn rejecting_transfers(mut self, status: &'static str) -> Self {
        self.reject_transfers_with = Some(status);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn adjust(&self, account: &AccountId, delta: i64) {
        let mut balances = self.balances.lock().unwrap();
        match balances.iter_mut().find(|(id, _)| id == account) {
            Some((_, balance)) => *balance += delta,
            None => balances.push((*account, delta)),
        }
    }

    fn balance_of(&self, account: &AccountId) -> i64 {
        self.balances
            .lock()
            .unwrap()
            .iter()
            .find(|(id, _)| id == account)
            .map(|(_, balance)| *balance)
            .unwrap_or(0)
    }
}

#[async_trait]
impl LedgerClient for RecordingLedger {
    async fn create_account(&self, initial_balance: Tinybars) -> LedgerResult<AccountId> {
        self.record(Call::CreateAccount(initial_balance));
        let mut next = self.next_account.lock().unwrap();
        let id = AccountId::new(0, 0, *next);
        *next += 1;
        drop(next);
        self.adjust(&id, initial_balance.get());
        Ok(id)
    }

    async fn balance(&self, account: &AccountId) -> LedgerResult<Tinybars> {
        self.record(Call::Balance(*account));
        Ok(Tinybars(self.balance_of(account)))
    }

    async fn transfer(
        &self,
        from: &AccountId,
        to: &AccountId,
        amount: Tinybars,
    ) -> LedgerResult<TransferSubmission> {
        self.record(Call::Transfer {
            from: *from,
            to: *to,
            amount,
        });
        if self.reject_transfers_with.is_none() {
            self.adjust(from, -amount.get());
            self.adjust(to, amount.get());
        }
        Ok(TransferSubmission {
            transaction_id: format!("{}@1700000000.000000001", from),
        })
    }

    async fn receipt(&self, submission: &TransferSubmission) -> LedgerResult<TransferReceipt> {
        self.record(Call::Receipt(submission.transaction_id.clone()));
        match self.reject_transfers_with {
            Some(status) => Err(LedgerError::Rejected {
                transaction_id: submission.transaction_id.clone(),
                status: status.to_string(),
            }),
            None => Ok(TransferReceipt {
                transaction_id: submission.transaction_id.clone(),
                status: "Success".to_string(),
            }),
        }
    }

    async fn balance_query_cost(&self, account: &AccountId) -> LedgerResult<Tinybars> {
        self.record(Call::Cost(*account));
        Ok(self.query_cost)
    }
}
