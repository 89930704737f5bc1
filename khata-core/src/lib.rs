//! khata-core: transaction types, the merchant categorizer, and the
//! injectable clock/id providers shared across the workspace.

pub mod categorizer;
pub mod error;
pub mod providers;
pub mod time;
pub mod transaction;

pub use categorizer::categorize_merchant;
pub use error::ClassifyError;
pub use providers::{Clock, FixedClock, IdSource, SequentialIds, SystemClock, UuidSource};
pub use time::{date_to_utc, parse_bank_date};
pub use transaction::{Category, Transaction, TxnSource, TxnStatus};
