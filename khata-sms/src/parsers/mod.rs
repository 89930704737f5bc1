//! Tier rule tables, one file per tier. Tier order (debit, credit card,
//! credit) is assembled in `cascade::SmsClassifier::new`.

pub mod credit;
pub mod credit_card;
pub mod debit;
