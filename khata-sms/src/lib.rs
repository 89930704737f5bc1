//! khata-sms: tiered regex cascade turning bank alert messages into
//! classified transactions.

pub mod amount;
pub mod cascade;
pub mod fallback;
pub mod normalize;
pub mod parsers;

pub use amount::parse_amount;
pub use cascade::{Rule, SmsClassifier, TxnDraft};
pub use fallback::FallbackExtractor;
pub use normalize::normalize;
