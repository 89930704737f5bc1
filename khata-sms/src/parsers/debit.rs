//! Debit tier: bank account debit patterns.
//!
//! Account-qualified dated pattern first, then UPI, then the generic
//! "debited" forms. Every rule emits source=bank, status=debited,
//! category=Payment.

use anyhow::Result;
use khata_core::{Category, TxnSource, TxnStatus, parse_bank_date};
use regex::{Captures, Regex};

use crate::amount::parse_amount;
use crate::cascade::{Rule, TxnDraft};

pub fn rules() -> Result<Vec<Rule>> {
    Ok(vec![
        // "Your Bank Acct ending 942 was debited Rs.35.00 on 02-May-25;
        //  Transfer to JOHN SMITH."
        Rule {
            name: "debit/account-dated",
            pattern: Regex::new(concat!(
                r"(?i)(?:a/c|acct|account)\s*(?:no\.?\s*)?(?:ending\s*(?:in\s*)?)?[x*]*\d+\s+",
                r"(?:was\s+|is\s+|has\s+been\s+)?debited\s+(?:with\s+|by\s+|for\s+)?",
                r"(?:rs\.?|inr|₹)\s*(?P<amount>[\d,]+(?:\.\d{1,2})?)",
                r"\s+on\s+(?P<date>\d{1,2}-[A-Za-z]{3}-\d{2})",
                r"(?:.*?\b(?:transfer\s+to|trf\s+to|towards)\s+(?P<payee>[^.;,]+))?"
            ))?,
            build: build_dated,
        },
        // "Rs.250.00 debited from A/c XX1234 via UPI to merchant@okaxis"
        Rule {
            name: "debit/upi",
            pattern: Regex::new(concat!(
                r"(?i)(?:rs\.?|inr|₹)\s*(?P<amount>[\d,]+(?:\.\d{1,2})?)\s+",
                r"(?:was\s+|has\s+been\s+)?debited\b.*?\bupi\b",
                r"(?:.*?\bto\s+(?P<payee>[\w.@-]+))?"
            ))?,
            build: build_upi,
        },
        // "debited with Rs.500" / "debited by INR 500"
        Rule {
            name: "debit/generic-keyword-first",
            pattern: Regex::new(concat!(
                r"(?i)debited\s+(?:with\s+|by\s+|for\s+)?",
                r"(?:rs\.?|inr|₹)\s*(?P<amount>[\d,]+(?:\.\d{1,2})?)"
            ))?,
            build: build_generic,
        },
        // "Rs.500 debited"
        Rule {
            name: "debit/generic-amount-first",
            pattern: Regex::new(concat!(
                r"(?i)(?:rs\.?|inr|₹)\s*(?P<amount>[\d,]+(?:\.\d{1,2})?)\s+",
                r"(?:has\s+been\s+|is\s+|was\s+)?debited"
            ))?,
            build: build_generic,
        },
    ])
}

fn draft(amount: f64, date: Option<chrono::NaiveDate>, description: String) -> TxnDraft {
    TxnDraft {
        date,
        description,
        amount,
        category: Category::Payment,
        source: TxnSource::Bank,
        status: TxnStatus::Debited,
    }
}

fn build_dated(caps: &Captures) -> Option<TxnDraft> {
    let amount = parse_amount(caps.name("amount")?.as_str())?;
    let date = caps.name("date").and_then(|m| parse_bank_date(m.as_str()));
    let description = caps
        .name("payee")
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| "Bank debit".to_string());
    Some(draft(amount, date, description))
}

fn build_upi(caps: &Captures) -> Option<TxnDraft> {
    let amount = parse_amount(caps.name("amount")?.as_str())?;
    let description = caps
        .name("payee")
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| "UPI payment".to_string());
    Some(draft(amount, None, description))
}

fn build_generic(caps: &Captures) -> Option<TxnDraft> {
    let amount = parse_amount(caps.name("amount")?.as_str())?;
    Some(draft(amount, None, "Account debit".to_string()))
}
