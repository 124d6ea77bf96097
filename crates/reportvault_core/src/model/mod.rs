//! Domain model for stored documents.
//!
//! # Responsibility
//! - Define the canonical document record held by a store.
//! - Enforce identifier and content invariants at construction time.
//!
//! # Invariants
//! - A `Document` is immutable once constructed.
//! - Every document is addressed by a stable, non-empty identifier.

pub mod document;
