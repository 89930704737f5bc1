//! Whitespace normalization for raw message text.

/// Collapse runs of whitespace to single spaces and trim the ends.
/// Idempotent: normalizing twice equals normalizing once.
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
