//! Last-resort extractor for messages no tiered rule recognizes.
//!
//! Scans generic "amount near currency marker" patterns in order, then
//! infers direction from keyword presence. The debit keyword check runs
//! first, so a message containing both sets classifies as debited.

use anyhow::Result;
use khata_core::{Category, TxnSource, TxnStatus};
use regex::Regex;

use crate::amount::parse_amount;
use crate::cascade::TxnDraft;

/// Generic amount patterns, tried in order.
const AMOUNT_PATTERNS: &[&str] = &[
    // amount before the currency marker: "500 Rs"
    r"(?i)(?P<amount>[\d,]+(?:\.\d{1,2})?)\s*(?:\b(?:rs\.?|inr)|₹)",
    // amount after the currency marker: "Rs.500". The boundary keeps words
    // like "offers" from reading as a currency marker.
    r"(?i)(?:\b(?:rs\.?|inr)|₹)\s*(?P<amount>[\d,]+(?:\.\d{1,2})?)",
    // "amount of Rs.500"
    r"(?i)amount\s+of\s+(?:rs\.?|inr|₹)?\s*(?P<amount>[\d,]+(?:\.\d{1,2})?)",
    // "spent 500" / "paid 500" / "debited 500"
    r"(?i)(?:spent|paid|debited)\s+(?:rs\.?|inr|₹)?\s*(?P<amount>[\d,]+(?:\.\d{1,2})?)",
];

const DEBIT_KEYWORDS: &[&str] = &["debited", "paid", "spent", "purchase", "withdraw", "transfer to"];
const CREDIT_KEYWORDS: &[&str] = &["credited", "received", "deposited", "transfer from", "refund"];
const CARD_KEYWORDS: &[&str] = &["credit card", "card ending", " cc "];

/// Compiled fallback patterns; owned by the classifier.
pub struct FallbackExtractor {
    patterns: Vec<Regex>,
}

impl FallbackExtractor {
    pub fn new() -> Result<Self> {
        let patterns = AMOUNT_PATTERNS
            .iter()
            .map(|p| Regex::new(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Find any amount, then classify direction and source from keywords.
    /// Returns `None` when no pattern yields a positive amount.
    pub fn extract(&self, text: &str) -> Option<TxnDraft> {
        let amount = self.find_amount(text)?;
        let lower = text.to_lowercase();

        let is_debit = DEBIT_KEYWORDS.iter().any(|k| lower.contains(k));
        let is_credit = !is_debit && CREDIT_KEYWORDS.iter().any(|k| lower.contains(k));

        // No direction keyword at all defaults to debit.
        let (status, category) = if is_credit {
            (TxnStatus::Credited, Category::OtherIncome)
        } else {
            (TxnStatus::Debited, Category::Miscellaneous)
        };

        let source = if CARD_KEYWORDS.iter().any(|k| lower.contains(k)) {
            TxnSource::Credit
        } else {
            TxnSource::Bank
        };

        Some(TxnDraft {
            date: None,
            description: "Unknown transaction".to_string(),
            amount,
            category,
            source,
            status,
        })
    }

    fn find_amount(&self, text: &str) -> Option<f64> {
        for pattern in &self.patterns {
            let Some(caps) = pattern.captures(text) else {
                continue;
            };
            if let Some(amount) = parse_amount(&caps["amount"]) {
                return Some(amount);
            }
            // Matched but unparseable; try the next pattern.
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> FallbackExtractor {
        FallbackExtractor::new().unwrap()
    }

    #[test]
    fn test_paid_is_debit() {
        let d = extractor().extract("paid Rs.200 for coffee").unwrap();
        assert_eq!(d.amount, 200.0);
        assert_eq!(d.status, TxnStatus::Debited);
        assert_eq!(d.source, TxnSource::Bank);
        assert_eq!(d.category, Category::Miscellaneous);
    }

    #[test]
    fn test_refund_is_credit() {
        let d = extractor().extract("refund of Rs.350 received").unwrap();
        assert_eq!(d.status, TxnStatus::Credited);
        assert_eq!(d.category, Category::OtherIncome);
    }

    #[test]
    fn test_debit_keywords_win_over_credit_keywords() {
        let d = extractor().extract("paid Rs.100, refund expected").unwrap();
        assert_eq!(d.status, TxnStatus::Debited);
    }

    #[test]
    fn test_card_keyword_sets_source() {
        let d = extractor().extract("spent Rs.750 using your credit card").unwrap();
        assert_eq!(d.source, TxnSource::Credit);
        assert_eq!(d.status, TxnStatus::Debited);
    }

    #[test]
    fn test_amount_before_currency() {
        let d = extractor().extract("transfer to Ramesh, 1,200 Rs").unwrap();
        assert_eq!(d.amount, 1200.0);
        assert_eq!(d.status, TxnStatus::Debited);
    }

    #[test]
    fn test_no_direction_keyword_defaults_to_debit() {
        let d = extractor().extract("Rs.400 towards monthly dues").unwrap();
        assert_eq!(d.status, TxnStatus::Debited);
        assert_eq!(d.category, Category::Miscellaneous);
    }

    #[test]
    fn test_no_amount_is_none() {
        assert!(extractor().extract("Hello, how are you?").is_none());
        assert!(extractor().extract("Your OTP is ABCD").is_none());
    }
}
