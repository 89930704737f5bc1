//! Keyword rules mapping merchant/description text to a spending category.
//!
//! No LLM needed — an ordered keyword table covers the merchants that show
//! up in bank alerts. Listing order is priority: Dining is tested before
//! Shopping, so "restaurant" beats a later "mall" hit on the same text.

use crate::transaction::Category;

/// Ordered (category, keywords) table. First keyword set with any hit wins.
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Groceries,
        &["bigbasket", "blinkit", "zepto", "grofers", "dmart", "grocery", "supermarket", "kirana"],
    ),
    (
        Category::Dining,
        &["swiggy", "zomato", "restaurant", "cafe", "coffee", "dominos", "pizza", "mcdonald", "kfc", "eatery", "dhaba"],
    ),
    (
        Category::Transportation,
        &["uber", "ola cabs", "rapido", "irctc", "redbus", "metro", "petrol", "fuel", "parking", "toll", "fastag"],
    ),
    (
        Category::Utilities,
        &["electricity", "water bill", "gas bill", "broadband", "wifi", "recharge", "airtel", "jio", "vodafone", "bsnl", "dth"],
    ),
    (
        Category::Shopping,
        &["amazon", "flipkart", "myntra", "ajio", "meesho", "nykaa", "mall", "mart", "store"],
    ),
    (
        Category::Entertainment,
        &["netflix", "hotstar", "spotify", "bookmyshow", "pvr", "inox", "movie", "gaming"],
    ),
    (
        Category::Healthcare,
        &["pharmacy", "apollo", "medplus", "pharmeasy", "1mg", "hospital", "clinic", "diagnostic"],
    ),
    (
        Category::Insurance,
        &["insurance", "policy", "premium", "lic india"],
    ),
    (
        Category::Investment,
        &["zerodha", "groww", "upstox", "mutual fund", "sip", "nps", "ppf", "demat"],
    ),
    (
        Category::Education,
        &["school", "college", "university", "tuition", "course", "udemy", "coursera"],
    ),
    (
        Category::Rent,
        &["rent", "landlord", "lease"],
    ),
];

/// Categorize merchant text. Case-insensitive substring match, first match
/// wins; `Miscellaneous` when nothing hits.
pub fn categorize_merchant(text: &str) -> Category {
    let text = text.to_lowercase();
    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|k| text.contains(k)) {
            return *category;
        }
    }
    Category::Miscellaneous
}
