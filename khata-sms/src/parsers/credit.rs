//! Credit tier: money arriving in the account.
//!
//! Salary rules qualify on the "salary" keyword and map to Income; the
//! generic credited/received/deposited rules map to OtherIncome. Every rule
//! emits source=bank, status=credited.

use anyhow::Result;
use khata_core::{Category, TxnSource, TxnStatus};
use regex::{Captures, Regex};

use crate::amount::parse_amount;
use crate::cascade::{Rule, TxnDraft};

pub fn rules() -> Result<Vec<Rule>> {
    Ok(vec![
        // "Salary of Rs.75,000 credited to your account"
        Rule {
            name: "credit/salary",
            pattern: Regex::new(concat!(
                r"(?i)salary\s+(?:of\s+)?",
                r"(?:rs\.?|inr|₹)\s*(?P<amount>[\d,]+(?:\.\d{1,2})?)"
            ))?,
            build: build_salary,
        },
        // "Rs.75,000 credited to A/c XX12 towards salary"
        Rule {
            name: "credit/salary-suffix",
            pattern: Regex::new(concat!(
                r"(?i)(?:rs\.?|inr|₹)\s*(?P<amount>[\d,]+(?:\.\d{1,2})?)\s+",
                r"(?:has\s+been\s+|is\s+|was\s+)?credited\b.*?\bsalary\b"
            ))?,
            build: build_salary,
        },
        // "Rs.50,000 credited to your account"
        Rule {
            name: "credit/generic-amount-first",
            pattern: Regex::new(concat!(
                r"(?i)(?:rs\.?|inr|₹)\s*(?P<amount>[\d,]+(?:\.\d{1,2})?)\s+",
                r"(?:has\s+been\s+|is\s+|was\s+)?(?:credited|received|deposited)"
            ))?,
            build: build_generic,
        },
        // "credited with Rs.5,000"
        Rule {
            name: "credit/generic-keyword-first",
            pattern: Regex::new(concat!(
                r"(?i)(?:credited|received|deposited)\s+(?:with\s+)?",
                r"(?:rs\.?|inr|₹)\s*(?P<amount>[\d,]+(?:\.\d{1,2})?)"
            ))?,
            build: build_generic,
        },
    ])
}

fn build_salary(caps: &Captures) -> Option<TxnDraft> {
    build(caps, "Salary", Category::Income)
}

fn build_generic(caps: &Captures) -> Option<TxnDraft> {
    build(caps, "Account credit", Category::OtherIncome)
}

fn build(caps: &Captures, description: &str, category: Category) -> Option<TxnDraft> {
    let amount = parse_amount(caps.name("amount")?.as_str())?;
    Some(TxnDraft {
        date: None,
        description: description.to_string(),
        amount,
        category,
        source: TxnSource::Bank,
        status: TxnStatus::Credited,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_match(text: &str) -> Option<(&'static str, TxnDraft)> {
        for rule in rules().unwrap() {
            if let Some(caps) = rule.pattern.captures(text) {
                if let Some(d) = (rule.build)(&caps) {
                    return Some((rule.name, d));
                }
            }
        }
        None
    }

    #[test]
    fn test_salary_credit() {
        let (name, d) = first_match("Salary of Rs.75,000 credited to your account").unwrap();
        assert_eq!(name, "credit/salary");
        assert_eq!(d.amount, 75000.0);
        assert_eq!(d.category, Category::Income);
        assert_eq!(d.status, TxnStatus::Credited);
    }

    #[test]
    fn test_salary_suffix_form() {
        let (name, d) = first_match("Rs.82,500 credited to A/c XX12 towards salary").unwrap();
        assert_eq!(name, "credit/salary-suffix");
        assert_eq!(d.category, Category::Income);
    }

    #[test]
    fn test_generic_credit_without_salary_keyword() {
        let (name, d) =
            first_match("Rs.50,000 credited to your account. Available balance is Rs.1,25,000")
                .unwrap();
        assert_eq!(name, "credit/generic-amount-first");
        assert_eq!(d.amount, 50000.0);
        assert_eq!(d.category, Category::OtherIncome);
        assert_eq!(d.description, "Account credit");
    }

    #[test]
    fn test_generic_keyword_first() {
        let (_, d) = first_match("Your account was credited with Rs.5,000").unwrap();
        assert_eq!(d.amount, 5000.0);
        assert_eq!(d.category, Category::OtherIncome);
    }
}
