//! Bundled report artifact.
//!
//! # Responsibility
//! - Embed the one shipped document and expose it through the store API.
//!
//! # Invariants
//! - The artifact is authored once and compiled in; nothing at runtime can
//!   mutate it.

use crate::model::document::{Document, DocumentValidationError};
use crate::store::MemoryDocumentStore;

/// Identifier of the bundled report.
pub const REPORT_IDENTIFIER: &str = "report";

const REPORT_TEXT: &str = include_str!("../assets/report.md");

/// Returns the bundled report as a validated document.
///
/// # Errors
/// Fails only if the embedded artifact violates document invariants, which
/// would indicate a broken build rather than a runtime condition.
pub fn bundled_report() -> Result<Document, DocumentValidationError> {
    Document::new(REPORT_IDENTIFIER, REPORT_TEXT)
}

/// Returns an in-memory store pre-loaded with the bundled report.
pub fn bundled_report_store() -> Result<MemoryDocumentStore, DocumentValidationError> {
    Ok(MemoryDocumentStore::new(bundled_report()?))
}

#[cfg(test)]
mod tests {
    use super::{bundled_report, REPORT_IDENTIFIER};

    #[test]
    fn bundled_report_passes_validation() {
        let doc = bundled_report().unwrap();
        assert_eq!(doc.identifier(), REPORT_IDENTIFIER);
        assert!(doc.byte_len() > 0);
    }

    #[test]
    fn bundled_report_is_structured_prose() {
        let doc = bundled_report().unwrap();
        assert!(doc.content().starts_with("# "));
        assert!(doc.content().contains("\n## "));
    }
}
