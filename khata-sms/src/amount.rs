//! Amount capture parsing.

/// Strip thousands separators and parse. Only positive finite amounts count;
/// anything else is a non-match so the cascade can keep scanning.
///
/// Indian grouping works: "1,23,456.50" parses to 123456.50.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().replace(',', "");
    let value: f64 = cleaned.parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}
