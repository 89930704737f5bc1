//! HTTP client for the transaction persistence service.

use anyhow::{Context, Result, bail};
use khata_core::{Category, Transaction, TxnSource, TxnStatus};
use serde::Serialize;

/// Wire payload for the store endpoint. `date` is RFC 3339; `type` mirrors
/// `status` for consumers that filter on it.
#[derive(Debug, Serialize)]
struct StoreRequest<'a> {
    id: &'a str,
    date: String,
    description: &'a str,
    amount: f64,
    category: Category,
    source: TxnSource,
    status: TxnStatus,
    #[serde(rename = "type")]
    kind: &'static str,
}

impl<'a> StoreRequest<'a> {
    fn from_txn(txn: &'a Transaction) -> Self {
        Self {
            id: &txn.id,
            date: txn.date.to_rfc3339(),
            description: &txn.description,
            amount: txn.amount,
            category: txn.category,
            source: txn.source,
            status: txn.status,
            kind: txn.status.type_label(),
        }
    }
}

/// Client for the transactions REST endpoint.
pub struct PersistenceClient {
    base_url: String,
    http: reqwest::Client,
}

impl PersistenceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Store one transaction remotely. Returns the server's copy, which may
    /// carry a server-assigned id or normalized date.
    pub async fn store(&self, txn: &Transaction) -> Result<Transaction> {
        let body = StoreRequest::from_txn(txn);
        let resp = self
            .http
            .post(format!("{}/transactions", self.base_url))
            .json(&body)
            .send()
            .await
            .context("persistence request")?;

        let status = resp.status();
        if !status.is_success() {
            let txt = resp.text().await.unwrap_or_default();
            bail!("persistence error: {status} {txt}");
        }

        resp.json::<Transaction>()
            .await
            .context("parse persistence response")
    }
}
