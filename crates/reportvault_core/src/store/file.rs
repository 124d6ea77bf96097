//! File-backed document store.
//!
//! # Responsibility
//! - Load the artifact from disk once at open and capture a snapshot.
//! - Re-read the artifact on every `get` so medium failures surface
//!   instead of stale content.
//!
//! # Invariants
//! - `open` validates the artifact before a store exists.
//! - `get` never returns content that differs from the open-time snapshot.
//! - `create` writes the artifact exactly once; an existing file is an error.

use super::{DocumentStore, StoreError, StoreResult};
use crate::model::document::Document;
use log::{error, info};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Store reading one document from a single UTF-8 text file.
#[derive(Debug)]
pub struct FileDocumentStore {
    identifier: String,
    path: PathBuf,
    snapshot: String,
}

impl FileDocumentStore {
    /// Opens a store over an existing artifact file.
    ///
    /// Reads and validates the artifact, then keeps its content as the
    /// snapshot every later `get` is checked against.
    ///
    /// # Errors
    /// - `Io` when the file cannot be read.
    /// - `Corrupted` when the file holds bytes that are not valid UTF-8.
    /// - `Validation` when the artifact fails document invariants.
    pub fn open(identifier: impl Into<String>, path: impl AsRef<Path>) -> StoreResult<Self> {
        let identifier = identifier.into();
        let path = path.as_ref().to_path_buf();
        let started_at = Instant::now();
        info!(
            "event=store_open module=store status=start identifier={identifier} path={}",
            path.display()
        );

        let snapshot = match read_artifact(&path) {
            Ok(content) => content,
            Err(err) => {
                error!(
                    "event=store_open module=store status=error identifier={identifier} duration_ms={} error={err}",
                    started_at.elapsed().as_millis()
                );
                return Err(err);
            }
        };

        // Validation only; the document itself is rebuilt from disk on get.
        let document = Document::new(identifier.clone(), snapshot.clone())?;

        info!(
            "event=store_open module=store status=ok identifier={identifier} bytes={} lines={} duration_ms={}",
            document.byte_len(),
            document.line_count(),
            started_at.elapsed().as_millis()
        );

        Ok(Self {
            identifier,
            path,
            snapshot,
        })
    }

    /// Writes the artifact once, then opens a store over it.
    ///
    /// Single-writer-at-creation: fails if the path already exists.
    ///
    /// # Errors
    /// - `Validation` when the document invariants fail.
    /// - `Io` when the file exists or cannot be written.
    pub fn create(
        identifier: impl Into<String>,
        path: impl AsRef<Path>,
        content: &str,
    ) -> StoreResult<Self> {
        let identifier = identifier.into();
        let path = path.as_ref().to_path_buf();

        // Validate before anything touches the medium.
        Document::new(identifier.clone(), content)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;
        file.write_all(content.as_bytes())
            .map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;

        info!(
            "event=store_create module=store status=ok identifier={identifier} bytes={} path={}",
            content.len(),
            path.display()
        );

        Self::open(identifier, path)
    }

    /// Path of the backing artifact.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentStore for FileDocumentStore {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn get(&self, identifier: &str) -> StoreResult<String> {
        if identifier != self.identifier {
            return Err(StoreError::NotFound(identifier.to_string()));
        }

        let content = read_artifact(&self.path)?;
        if content != self.snapshot {
            return Err(StoreError::Corrupted {
                path: self.path.clone(),
                detail: "artifact no longer matches the content captured at open".to_string(),
            });
        }

        Ok(content)
    }
}

fn read_artifact(path: &Path) -> StoreResult<String> {
    let bytes = fs::read(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|err| StoreError::Corrupted {
        path: path.to_path_buf(),
        detail: format!(
            "artifact is not valid UTF-8 at byte {}",
            err.utf8_error().valid_up_to()
        ),
    })
}
