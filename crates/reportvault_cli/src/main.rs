//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `reportvault_core` linkage.
//! - Keep output deterministic: no flags, no environment variables.

use reportvault_core::{bundled_report_store, DocumentStore, REPORT_IDENTIFIER};

fn main() {
    println!("reportvault_core ping={}", reportvault_core::ping());
    println!(
        "reportvault_core version={}",
        reportvault_core::core_version()
    );

    let store = match bundled_report_store() {
        Ok(store) => store,
        Err(err) => {
            eprintln!("bundled report failed validation: {err}");
            std::process::exit(1);
        }
    };

    let document = store.document();
    println!(
        "report identifier={} bytes={} lines={}",
        document.identifier(),
        document.byte_len(),
        document.line_count()
    );

    if let Err(err) = store.get(REPORT_IDENTIFIER) {
        eprintln!("bundled report retrieval failed: {err}");
        std::process::exit(1);
    }
}
