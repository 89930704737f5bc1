//! Transaction record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A classified money movement. Immutable once emitted; corrections are new
/// records, not edits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Unique identifier, assigned at creation
    pub id: String,
    /// When the money moved; classification time when the message carried no date
    pub date: DateTime<Utc>,
    /// Merchant name, payee, or a generic label
    pub description: String,
    /// Always positive; direction lives in `status`
    pub amount: f64,
    pub category: Category,
    /// Which rail the transaction arrived on
    pub source: TxnSource,
    /// Direction of the money movement
    pub status: TxnStatus,
}

/// Closed spending/income taxonomy
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    #[serde(rename = "groceries")]
    Groceries,
    #[serde(rename = "dining")]
    Dining,
    #[serde(rename = "transportation")]
    Transportation,
    #[serde(rename = "utilities")]
    Utilities,
    #[serde(rename = "shopping")]
    Shopping,
    #[serde(rename = "entertainment")]
    Entertainment,
    #[serde(rename = "healthcare")]
    Healthcare,
    #[serde(rename = "insurance")]
    Insurance,
    #[serde(rename = "investment")]
    Investment,
    #[serde(rename = "education")]
    Education,
    #[serde(rename = "rent")]
    Rent,
    #[serde(rename = "payment")]
    Payment,
    #[serde(rename = "income")]
    Income,
    #[serde(rename = "other-income")]
    OtherIncome,
    #[serde(rename = "miscellaneous")]
    Miscellaneous,
}

impl Category {
    /// Income-side categories; credited transactions carry only these.
    pub fn is_income(&self) -> bool {
        matches!(self, Category::Income | Category::OtherIncome)
    }
}

/// Which rail a transaction arrived on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TxnSource {
    #[serde(rename = "bank")]
    Bank,
    #[serde(rename = "credit")]
    Credit,
}

/// Direction of money movement. `Pending` is reserved for manually entered
/// records; the classifier never assigns it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TxnStatus {
    #[serde(rename = "credited")]
    Credited,
    #[serde(rename = "debited")]
    Debited,
    #[serde(rename = "pending")]
    Pending,
}

impl TxnStatus {
    /// Derived `type` label persisted alongside the record
    pub fn type_label(&self) -> &'static str {
        match self {
            TxnStatus::Credited => "credit",
            TxnStatus::Debited => "debit",
            TxnStatus::Pending => "pending",
        }
    }
}

impl Transaction {
    pub fn is_debit(&self) -> bool {
        self.status == TxnStatus::Debited
    }

    pub fn is_credit(&self) -> bool {
        self.status == TxnStatus::Credited
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Transaction {
        Transaction {
            id: "txn-001".to_string(),
            date: Utc.with_ymd_and_hms(2025, 5, 2, 0, 0, 0).unwrap(),
            description: "JOHN SMITH".to_string(),
            amount: 35.0,
            category: Category::Payment,
            source: TxnSource::Bank,
            status: TxnStatus::Debited,
        }
    }

    #[test]
    fn test_direction_helpers() {
        let txn = sample();
        assert!(txn.is_debit());
        assert!(!txn.is_credit());
        assert_eq!(txn.status.type_label(), "debit");
    }

    #[test]
    fn test_serde_renames() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["category"], "payment");
        assert_eq!(json["source"], "bank");
        assert_eq!(json["status"], "debited");
        // chrono serializes DateTime<Utc> as RFC 3339
        assert_eq!(json["date"], "2025-05-02T00:00:00Z");
    }

    #[test]
    fn test_income_side_categories() {
        assert!(Category::Income.is_income());
        assert!(Category::OtherIncome.is_income());
        assert!(!Category::Payment.is_income());
        assert!(!Category::Miscellaneous.is_income());
    }
}
