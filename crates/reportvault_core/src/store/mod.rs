//! Document store contracts and implementations.
//!
//! # Responsibility
//! - Define the read-only retrieval contract over stored documents.
//! - Keep storage-medium details inside the implementations.
//!
//! # Invariants
//! - Stores expose no write, update, or delete operations after creation.
//! - `get` returns semantic errors (`NotFound`) in addition to medium
//!   transport errors (`Io`, `Corrupted`).

use crate::model::document::DocumentValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod file;
mod memory;

pub use file::FileDocumentStore;
pub use memory::MemoryDocumentStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Retrieval and bootstrap errors for document stores.
#[derive(Debug)]
pub enum StoreError {
    /// Requested identifier does not match the stored document.
    NotFound(String),
    /// Backing medium could not be read (artifact deleted or unreadable).
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Backing artifact no longer matches the content captured at open,
    /// or holds bytes that are not valid UTF-8.
    Corrupted { path: PathBuf, detail: String },
    /// Artifact content failed document invariants.
    Validation(DocumentValidationError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(identifier) => write!(f, "document not found: {identifier}"),
            Self::Io { path, source } => {
                write!(f, "failed to read artifact `{}`: {source}", path.display())
            }
            Self::Corrupted { path, detail } => {
                write!(f, "artifact `{}` is corrupted: {detail}", path.display())
            }
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Validation(err) => Some(err),
            Self::NotFound(_) | Self::Corrupted { .. } => None,
        }
    }
}

impl From<DocumentValidationError> for StoreError {
    fn from(value: DocumentValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Read-only retrieval contract over a single stored document.
///
/// Implementations hold exactly one document, created once and never
/// mutated, so any number of concurrent readers need no coordination.
pub trait DocumentStore {
    /// Identifier of the one document this store holds.
    fn identifier(&self) -> &str;

    /// Returns the full text for the matching identifier.
    ///
    /// # Errors
    /// - `NotFound` when `identifier` does not match the stored document.
    /// - `Io` / `Corrupted` when the backing medium fails (file-backed
    ///   stores only).
    fn get(&self, identifier: &str) -> StoreResult<String>;
}
