//! Credit-card tier: card spend patterns.
//!
//! Captured merchant text goes through the merchant categorizer instead of
//! a fixed category. Every rule emits source=credit, status=debited.

use anyhow::Result;
use khata_core::{Category, TxnSource, TxnStatus, categorize_merchant, parse_bank_date};
use regex::{Captures, Regex};

use crate::amount::parse_amount;
use crate::cascade::{Rule, TxnDraft};

pub fn rules() -> Result<Vec<Rule>> {
    Ok(vec![
        // "HDFC Bank Credit Card spent Rs.1,500 at Amazon.com"
        Rule {
            name: "card/issuer-spent",
            pattern: Regex::new(concat!(
                r"(?i)(?:[a-z]+\s+)?bank\s+credit\s+card\s+(?:was\s+)?spent\s+",
                r"(?:rs\.?|inr|₹)\s*(?P<amount>[\d,]+(?:\.\d{1,2})?)",
                r"(?:\s+(?:at|in)\s+(?P<merchant>.+?))?",
                r"(?:\s+on\s+(?P<date>\d{1,2}-[A-Za-z]{3}-\d{2}))?\.?\s*$"
            ))?,
            build: build_card,
        },
        // "Rs.2,000 spent on your SBI Credit Card ending 5678 at BigBasket"
        Rule {
            name: "card/amount-spent-on-card",
            pattern: Regex::new(concat!(
                r"(?i)(?:rs\.?|inr|₹)\s*(?P<amount>[\d,]+(?:\.\d{1,2})?)\s+",
                r"(?:spent|charged)\s+(?:on|using)\s+(?:your\s+)?[a-z ]*card",
                r"(?:\s+ending\s+(?:in\s+)?[x*]*\d+)?",
                r"(?:\s+(?:at|in)\s+(?P<merchant>.+?))?\.?\s*$"
            ))?,
            build: build_card,
        },
        // "Your credit card ending 1122 was used for Rs.450 at PVR Cinemas."
        Rule {
            name: "card/used-for",
            pattern: Regex::new(concat!(
                r"(?i)(?:credit\s+)?card(?:\s+ending\s+(?:in\s+)?[x*]*\d+)?\s+",
                r"(?:was\s+)?used\s+for\s+(?:a\s+)?(?:purchase\s+of\s+)?",
                r"(?:rs\.?|inr|₹)\s*(?P<amount>[\d,]+(?:\.\d{1,2})?)",
                r"(?:\s+(?:at|in)\s+(?P<merchant>.+?))?\.?\s*$"
            ))?,
            build: build_card,
        },
    ])
}

fn build_card(caps: &Captures) -> Option<TxnDraft> {
    let amount = parse_amount(caps.name("amount")?.as_str())?;
    let date = caps.name("date").and_then(|m| parse_bank_date(m.as_str()));
    let merchant = caps.name("merchant").map(|m| m.as_str().trim().to_string());
    let category = merchant
        .as_deref()
        .map(categorize_merchant)
        .unwrap_or(Category::Miscellaneous);
    Some(TxnDraft {
        date,
        description: merchant.unwrap_or_else(|| "Credit card spend".to_string()),
        amount,
        category,
        source: TxnSource::Credit,
        status: TxnStatus::Debited,
    })
}
