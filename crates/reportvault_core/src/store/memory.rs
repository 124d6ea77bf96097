//! In-memory document store.
//!
//! # Responsibility
//! - Hold one validated document entirely in memory.
//! - Back the bundled artifact without touching the filesystem.
//!
//! # Invariants
//! - The held document never changes after construction, so repeated `get`
//!   calls return byte-for-byte identical content.

use super::{DocumentStore, StoreError, StoreResult};
use crate::model::document::Document;

/// Store holding one document in memory.
///
/// No interior mutability; the store is safe to share across threads.
#[derive(Debug, Clone)]
pub struct MemoryDocumentStore {
    document: Document,
}

impl MemoryDocumentStore {
    /// Creates a store around an already-validated document.
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Borrow of the held document, for metadata probes.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn identifier(&self) -> &str {
        self.document.identifier()
    }

    fn get(&self, identifier: &str) -> StoreResult<String> {
        if identifier != self.document.identifier() {
            return Err(StoreError::NotFound(identifier.to_string()));
        }
        Ok(self.document.content().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryDocumentStore;
    use crate::model::document::Document;
    use crate::store::{DocumentStore, StoreError};

    fn store() -> MemoryDocumentStore {
        let doc = Document::new("report", "# Heading\n\nProse body.\n").unwrap();
        MemoryDocumentStore::new(doc)
    }

    #[test]
    fn get_returns_identical_content_on_every_call() {
        let store = store();
        let first = store.get("report").unwrap();
        let second = store.get("report").unwrap();
        assert_eq!(first, second);
        assert_eq!(first, "# Heading\n\nProse body.\n");
    }

    #[test]
    fn get_with_unknown_identifier_is_not_found() {
        let store = store();
        let err = store.get("missing").unwrap_err();
        assert!(matches!(err, StoreError::NotFound(id) if id == "missing"));
    }
}
