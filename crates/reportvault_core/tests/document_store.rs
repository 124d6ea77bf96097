use reportvault_core::{
    Document, DocumentStore, DocumentValidationError, FileDocumentStore, MemoryDocumentStore,
    StoreError,
};
use std::fs;
use tempfile::TempDir;

const REPORT_BODY: &str = "# Annual Review\n\nFindings in prose form.\n";

fn artifact_dir() -> TempDir {
    TempDir::new().unwrap()
}

#[test]
fn memory_get_is_idempotent_byte_for_byte() {
    let store = MemoryDocumentStore::new(Document::new("report", REPORT_BODY).unwrap());

    let first = store.get("report").unwrap();
    let second = store.get("report").unwrap();
    assert_eq!(first.as_bytes(), second.as_bytes());
    assert_eq!(first, REPORT_BODY);
}

#[test]
fn memory_get_unknown_identifier_is_not_found() {
    let store = MemoryDocumentStore::new(Document::new("report", REPORT_BODY).unwrap());

    let err = store.get("missing").unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == "missing"));
}

#[test]
fn file_create_then_get_round_trips_losslessly() {
    let dir = artifact_dir();
    let path = dir.path().join("report.md");

    let store = FileDocumentStore::create("report", &path, REPORT_BODY).unwrap();
    let loaded = store.get("report").unwrap();

    assert_eq!(loaded, REPORT_BODY);
    assert_eq!(fs::read_to_string(&path).unwrap(), REPORT_BODY);
}

#[test]
fn file_create_refuses_existing_artifact() {
    let dir = artifact_dir();
    let path = dir.path().join("report.md");
    fs::write(&path, "already here").unwrap();

    let err = FileDocumentStore::create("report", &path, REPORT_BODY).unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
}

#[test]
fn file_open_reads_existing_artifact() {
    let dir = artifact_dir();
    let path = dir.path().join("report.md");
    fs::write(&path, REPORT_BODY).unwrap();

    let store = FileDocumentStore::open("report", &path).unwrap();
    assert_eq!(store.identifier(), "report");
    assert_eq!(store.get("report").unwrap(), REPORT_BODY);
}

#[test]
fn file_open_on_missing_artifact_is_io_error() {
    let dir = artifact_dir();
    let path = dir.path().join("absent.md");

    let err = FileDocumentStore::open("report", &path).unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
}

#[test]
fn file_get_after_artifact_removal_is_io_error() {
    let dir = artifact_dir();
    let path = dir.path().join("report.md");
    fs::write(&path, REPORT_BODY).unwrap();
    let store = FileDocumentStore::open("report", &path).unwrap();

    fs::remove_file(&path).unwrap();

    let err = store.get("report").unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
}

#[test]
fn file_get_after_artifact_mutation_is_corrupted_not_stale() {
    let dir = artifact_dir();
    let path = dir.path().join("report.md");
    fs::write(&path, REPORT_BODY).unwrap();
    let store = FileDocumentStore::open("report", &path).unwrap();

    fs::write(&path, "# Tampered\n\nDifferent text.\n").unwrap();

    let err = store.get("report").unwrap_err();
    assert!(matches!(err, StoreError::Corrupted { .. }));
}

#[test]
fn file_get_rejects_non_utf8_artifact_as_corrupted() {
    let dir = artifact_dir();
    let path = dir.path().join("report.md");
    fs::write(&path, REPORT_BODY).unwrap();
    let store = FileDocumentStore::open("report", &path).unwrap();

    fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

    let err = store.get("report").unwrap_err();
    assert!(matches!(err, StoreError::Corrupted { .. }));
}

#[test]
fn file_get_unknown_identifier_is_not_found_without_touching_disk() {
    let dir = artifact_dir();
    let path = dir.path().join("report.md");
    fs::write(&path, REPORT_BODY).unwrap();
    let store = FileDocumentStore::open("report", &path).unwrap();

    // Identifier mismatch must win even when the medium is gone.
    fs::remove_file(&path).unwrap();
    let err = store.get("missing").unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == "missing"));
}

#[test]
fn file_open_rejects_empty_artifact_as_validation_error() {
    let dir = artifact_dir();
    let path = dir.path().join("empty.md");
    fs::write(&path, "").unwrap();

    let err = FileDocumentStore::open("report", &path).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(DocumentValidationError::EmptyContent)
    ));
}

#[test]
fn stores_share_contract_through_trait_object() {
    let dir = artifact_dir();
    let path = dir.path().join("report.md");
    fs::write(&path, REPORT_BODY).unwrap();

    let stores: Vec<Box<dyn DocumentStore>> = vec![
        Box::new(MemoryDocumentStore::new(
            Document::new("report", REPORT_BODY).unwrap(),
        )),
        Box::new(FileDocumentStore::open("report", &path).unwrap()),
    ];

    for store in stores {
        assert_eq!(store.identifier(), "report");
        assert_eq!(store.get("report").unwrap(), REPORT_BODY);
    }
}
