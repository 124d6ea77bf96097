//! Document domain model.
//!
//! # Responsibility
//! - Define the immutable text artifact record and its fixed format tag.
//! - Validate identifier and content invariants before a document exists.
//!
//! # Invariants
//! - Fields are private and no mutating API is exposed; content cannot
//!   change after construction.
//! - The identifier is a stable name, never a filesystem path.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed format tag for stored documents.
///
/// The store only holds structured prose (heading + paragraph text), so a
/// single variant is enough; the enum keeps the wire shape explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    /// UTF-8 prose with section headings.
    StructuredProse,
}

/// Validation failures raised by [`Document::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentValidationError {
    EmptyIdentifier,
    IdentifierNotTrimmed { identifier: String },
    IdentifierContainsPathSeparator { identifier: String },
    EmptyContent,
}

impl Display for DocumentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyIdentifier => write!(f, "document identifier cannot be empty"),
            Self::IdentifierNotTrimmed { identifier } => write!(
                f,
                "document identifier `{identifier}` has leading or trailing whitespace"
            ),
            Self::IdentifierContainsPathSeparator { identifier } => write!(
                f,
                "document identifier `{identifier}` contains a path separator; identifiers are names, not paths"
            ),
            Self::EmptyContent => write!(f, "document content cannot be empty"),
        }
    }
}

impl Error for DocumentValidationError {}

/// Immutable named text artifact.
///
/// Created once, read many times. The struct exposes read accessors only;
/// there is no update, merge, or versioning surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDocument")]
pub struct Document {
    identifier: String,
    content: String,
    format: DocumentFormat,
}

/// Unvalidated wire shape used to re-run invariants on deserialization.
#[derive(Deserialize)]
struct RawDocument {
    identifier: String,
    content: String,
    #[allow(dead_code)]
    format: DocumentFormat,
}

impl TryFrom<RawDocument> for Document {
    type Error = DocumentValidationError;

    fn try_from(raw: RawDocument) -> Result<Self, Self::Error> {
        Document::new(raw.identifier, raw.content)
    }
}

impl Document {
    /// Creates a validated document.
    ///
    /// # Errors
    /// - `EmptyIdentifier` when the identifier is empty.
    /// - `IdentifierNotTrimmed` when the identifier carries surrounding
    ///   whitespace.
    /// - `IdentifierContainsPathSeparator` when the identifier looks like a
    ///   path instead of a name.
    /// - `EmptyContent` when the content is empty.
    pub fn new(
        identifier: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, DocumentValidationError> {
        let identifier = identifier.into();
        let content = content.into();

        if identifier.is_empty() {
            return Err(DocumentValidationError::EmptyIdentifier);
        }
        if identifier != identifier.trim() {
            return Err(DocumentValidationError::IdentifierNotTrimmed { identifier });
        }
        if identifier.contains(['/', '\\']) {
            return Err(DocumentValidationError::IdentifierContainsPathSeparator { identifier });
        }
        if content.is_empty() {
            return Err(DocumentValidationError::EmptyContent);
        }

        Ok(Self {
            identifier,
            content,
            format: DocumentFormat::StructuredProse,
        })
    }

    /// Stable name addressing this document within a store.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Full document text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Fixed format tag.
    pub fn format(&self) -> DocumentFormat {
        self.format
    }

    /// Content size in bytes. Metadata for logging and probes only.
    pub fn byte_len(&self) -> usize {
        self.content.len()
    }

    /// Number of lines in the content. Metadata for logging and probes only.
    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }
}
