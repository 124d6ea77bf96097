//! Core library for reportvault.
//! Holds one immutable prose artifact and serves it read-only.

pub mod logging;
pub mod model;
pub mod report;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::document::{Document, DocumentFormat, DocumentValidationError};
pub use report::{bundled_report, bundled_report_store, REPORT_IDENTIFIER};
pub use store::{DocumentStore, FileDocumentStore, MemoryDocumentStore, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
