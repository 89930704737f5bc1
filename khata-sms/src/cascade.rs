//! The tiered pattern cascade.
//!
//! An ordered list of (regex, processor) rules tried top to bottom against
//! normalized message text. Rule position is the only priority — no
//! best-match scoring. The first rule whose regex matches and whose
//! processor yields a draft wins; a processor returning `None` (amount
//! capture did not parse to a positive number) falls through to the next
//! rule, and the fallback extractor runs only when every rule missed.

use anyhow::Result;
use chrono::NaiveDate;
use khata_core::{
    Category, ClassifyError, Clock, IdSource, SystemClock, Transaction, TxnSource, TxnStatus,
    UuidSource, date_to_utc,
};
use regex::{Captures, Regex};

use crate::fallback::FallbackExtractor;
use crate::normalize::normalize;
use crate::parsers;

/// Candidate transaction produced by a rule processor, before id and
/// default-date assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct TxnDraft {
    /// Parsed from the message, or `None` to default to "now"
    pub date: Option<NaiveDate>,
    pub description: String,
    pub amount: f64,
    pub category: Category,
    pub source: TxnSource,
    pub status: TxnStatus,
}

/// One cascade rule: a compiled pattern plus the processor turning its
/// captures into a draft.
pub struct Rule {
    pub name: &'static str,
    pub pattern: Regex,
    pub build: fn(&Captures) -> Option<TxnDraft>,
}

/// First-match-wins classifier over the three tiers (debit, credit card,
/// credit). Rule tables are compiled once at construction; `Clock` and
/// `IdSource` are injected so classification is deterministic under test.
pub struct SmsClassifier<C: Clock, I: IdSource> {
    rules: Vec<Rule>,
    fallback: FallbackExtractor,
    clock: C,
    ids: I,
}

impl SmsClassifier<SystemClock, UuidSource> {
    /// Classifier with wall-clock time and random ids.
    pub fn system() -> Result<Self> {
        Self::new(SystemClock, UuidSource)
    }
}

impl<C: Clock, I: IdSource> SmsClassifier<C, I> {
    pub fn new(clock: C, ids: I) -> Result<Self> {
        let mut rules = parsers::debit::rules()?;
        rules.extend(parsers::credit_card::rules()?);
        rules.extend(parsers::credit::rules()?);
        Ok(Self {
            rules,
            fallback: FallbackExtractor::new()?,
            clock,
            ids,
        })
    }

    /// Classify one raw message into at most one transaction.
    pub fn classify(&self, raw: &str) -> Result<Transaction, ClassifyError> {
        let text = normalize(raw);
        for rule in &self.rules {
            let Some(caps) = rule.pattern.captures(&text) else {
                continue;
            };
            if let Some(draft) = (rule.build)(&caps) {
                tracing::debug!(rule = rule.name, "cascade rule matched");
                return Ok(self.finish(draft));
            }
        }
        match self.fallback.extract(&text) {
            Some(draft) => {
                tracing::debug!("fallback extractor matched");
                Ok(self.finish(draft))
            }
            None => Err(ClassifyError::NoPatternMatched),
        }
    }

    /// Classify many messages independently. Each input produces at most
    /// one transaction; inputs share no state.
    pub fn classify_batch<'a, T>(&self, raws: T) -> Vec<Result<Transaction, ClassifyError>>
    where
        T: IntoIterator<Item = &'a str>,
    {
        raws.into_iter().map(|raw| self.classify(raw)).collect()
    }

    fn finish(&self, draft: TxnDraft) -> Transaction {
        Transaction {
            id: self.ids.next_id(),
            date: draft
                .date
                .map(date_to_utc)
                .unwrap_or_else(|| self.clock.now()),
            description: draft.description,
            amount: draft.amount,
            category: draft.category,
            source: draft.source,
            status: draft.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use khata_core::{FixedClock, SequentialIds};

    fn classifier() -> SmsClassifier<FixedClock, SequentialIds> {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap();
        SmsClassifier::new(FixedClock(now), SequentialIds::default()).unwrap()
    }

    #[test]
    fn test_dateless_message_defaults_to_clock_now() {
        let c = classifier();
        let txn = c.classify("paid Rs.200 for coffee").unwrap();
        assert_eq!(txn.id, "txn-1");
        assert_eq!(
            txn.date,
            Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_zero_amount_falls_through_to_no_match() {
        let c = classifier();
        // The generic debit rule matches structurally, but Rs.0.00 must not
        // produce a transaction.
        let err = c
            .classify("Your account was debited with Rs.0.00")
            .unwrap_err();
        assert_eq!(err, ClassifyError::NoPatternMatched);
    }

    #[test]
    fn test_tier_order_debit_beats_credit_card() {
        let c = classifier();
        let both_tiers =
            "Acct XX942 debited Rs.120.00 on 05-Jul-25 using HDFC Bank Credit Card spent Rs.120 at Amazon";
        let txn = c.classify(both_tiers).unwrap();
        assert_eq!(txn.source, TxnSource::Bank);
        assert_eq!(txn.status, TxnStatus::Debited);
        assert_eq!(txn.category, Category::Payment);

        // Without the account-debit clause the same text is a card spend.
        let card_only = "HDFC Bank Credit Card spent Rs.120 at Amazon";
        let txn = c.classify(card_only).unwrap();
        assert_eq!(txn.source, TxnSource::Credit);
    }

    #[test]
    fn test_batch_is_per_message() {
        let c = classifier();
        let results = c.classify_batch([
            "paid Rs.200 for coffee",
            "Hello, how are you?",
            "Rs.50,000 credited to your account",
        ]);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert_eq!(results[1], Err(ClassifyError::NoPatternMatched));
        assert!(results[2].is_ok());
        // Ids keep counting across the batch.
        assert_eq!(results[2].as_ref().unwrap().id, "txn-2");
    }
}
