//! Store-or-keep emitter: a failed persistence call never drops the
//! classified record.

use anyhow::Result;
use futures_util::future::join_all;
use khata_core::Transaction;

use crate::client::PersistenceClient;

/// Anything that can durably store a classified transaction.
#[allow(async_fn_in_trait)]
pub trait TransactionStore {
    async fn store(&self, txn: &Transaction) -> Result<Transaction>;
}

impl TransactionStore for PersistenceClient {
    async fn store(&self, txn: &Transaction) -> Result<Transaction> {
        PersistenceClient::store(self, txn).await
    }
}

/// Where a classified transaction ended up.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncOutcome {
    /// Stored remotely; carries the server's copy.
    Persisted(Transaction),
    /// Remote store failed; the classified record is kept as-is.
    LocalOnly { txn: Transaction, reason: String },
}

impl SyncOutcome {
    pub fn transaction(&self) -> &Transaction {
        match self {
            SyncOutcome::Persisted(txn) => txn,
            SyncOutcome::LocalOnly { txn, .. } => txn,
        }
    }

    pub fn is_persisted(&self) -> bool {
        matches!(self, SyncOutcome::Persisted(_))
    }
}

/// Emits classified transactions to a store, degrading to local-only on
/// failure.
pub struct TransactionEmitter<S: TransactionStore> {
    store: S,
}

impl<S: TransactionStore> TransactionEmitter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist one transaction. The in-memory record survives a failed
    /// store; callers always get their transaction back.
    pub async fn emit(&self, txn: Transaction) -> SyncOutcome {
        match self.store.store(&txn).await {
            Ok(stored) => SyncOutcome::Persisted(stored),
            Err(err) => {
                tracing::warn!(id = %txn.id, error = %err, "persistence failed; keeping transaction locally");
                SyncOutcome::LocalOnly {
                    txn,
                    reason: err.to_string(),
                }
            }
        }
    }

    /// Dispatch a batch concurrently. Classifications share no state, so
    /// each store call is independent.
    pub async fn emit_all(&self, txns: Vec<Transaction>) -> Vec<SyncOutcome> {
        join_all(txns.into_iter().map(|t| self.emit(t))).await
    }
}
