//! Classifier error taxonomy.

use thiserror::Error;

/// Terminal classification failure. A rule whose amount capture fails to
/// parse is treated as a non-match and never surfaces here; this error only
/// escalates once every tier and the fallback extractor are exhausted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("no transaction pattern matched; enter the record manually")]
    NoPatternMatched,
}
