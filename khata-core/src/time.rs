//! Bank date formats.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Parse the `DD-MMM-YY` stamp banks put in alert messages ("02-May-25").
/// Two-digit years expand to 20YY.
pub fn parse_bank_date(s: &str) -> Option<NaiveDate> {
    let mut it = s.trim().split('-');
    let day: u32 = it.next()?.parse().ok()?;
    let month = month_number(it.next()?)?;
    let yy: i32 = it.next()?.parse().ok()?;
    if it.next().is_some() || yy >= 100 {
        return None;
    }
    NaiveDate::from_ymd_opt(2000 + yy, month, day)
}

fn month_number(s: &str) -> Option<u32> {
    let month = match s.to_ascii_lowercase().as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

/// Promote a date-only bank stamp to a UTC instant at midnight.
pub fn date_to_utc(d: NaiveDate) -> DateTime<Utc> {
    d.and_time(NaiveTime::MIN).and_utc()
}
