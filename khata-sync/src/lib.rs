//! khata-sync: hands classified transactions to the persistence service,
//! keeping them locally when the remote store fails.

pub mod client;
pub mod emitter;

pub use client::PersistenceClient;
pub use emitter::{SyncOutcome, TransactionEmitter, TransactionStore};
