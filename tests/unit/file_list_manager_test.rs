//! Unit tests for the FileListManager and the FileEntry display derivations.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, UNIX_EPOCH};

use tempfile::TempDir;

use darkelixir::managers::file_list_manager::{FileListManager, FileListManagerTrait};
use darkelixir::types::errors::ListingError;
use darkelixir::types::file_entry::FileEntry;

fn manager_over(dir: &TempDir) -> FileListManager {
    FileListManager::new(dir.path().to_path_buf())
}

#[test]
fn test_refresh_lists_files_only() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.zip"), vec![0u8; 100]).unwrap();
    fs::write(dir.path().join("b.txt"), b"hi").unwrap();
    fs::create_dir(dir.path().join("subdir")).unwrap();

    let mut manager = manager_over(&dir);
    let count = manager.refresh().unwrap();

    assert_eq!(count, 2);
    let names: Vec<&str> = manager.entries().iter().map(|e| e.name.as_str()).collect();
    assert!(names.contains(&"a.zip"));
    assert!(names.contains(&"b.txt"));
    assert!(!names.contains(&"subdir"));
}

#[test]
fn test_refresh_replaces_previous_snapshot() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.zip"), b"x").unwrap();

    let mut manager = manager_over(&dir);
    manager.refresh().unwrap();
    assert_eq!(manager.entries().len(), 1);

    fs::write(dir.path().join("b.zip"), b"y").unwrap();
    // Snapshot is stale until the next manual refresh
    assert_eq!(manager.entries().len(), 1);

    manager.refresh().unwrap();
    assert_eq!(manager.entries().len(), 2);
}

#[test]
fn test_empty_folder_lists_nothing() {
    let dir = TempDir::new().unwrap();
    let mut manager = manager_over(&dir);
    assert_eq!(manager.refresh().unwrap(), 0);
    assert!(manager.entries().is_empty());
    assert!(manager.entry_at(0).is_none());
}

/// A missing folder is FolderUnavailable and the listing proceeds empty —
/// the screen shows a message, not an error state.
#[test]
fn test_missing_folder_is_unavailable_and_empty() {
    let dir = TempDir::new().unwrap();
    let gone = dir.path().join("nope");
    let mut manager = FileListManager::new(gone);

    let result = manager.refresh();
    assert!(matches!(result, Err(ListingError::FolderUnavailable(_))));
    assert!(manager.entries().is_empty());
}

/// The folder disappearing between refreshes clears the old snapshot.
#[test]
fn test_folder_vanishing_clears_entries() {
    let dir = TempDir::new().unwrap();
    let folder = dir.path().join("downloads");
    fs::create_dir(&folder).unwrap();
    fs::write(folder.join("a.zip"), b"x").unwrap();

    let mut manager = FileListManager::new(folder.clone());
    manager.refresh().unwrap();
    assert_eq!(manager.entries().len(), 1);

    fs::remove_dir_all(&folder).unwrap();
    assert!(manager.refresh().is_err());
    assert!(manager.entries().is_empty());
}

#[test]
fn test_remove_entry_deletes_file_and_row() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("a.zip");
    fs::write(&path, b"x").unwrap();

    let mut manager = manager_over(&dir);
    manager.refresh().unwrap();

    manager.remove_entry(&path).unwrap();
    assert!(!path.exists());
    assert!(manager.entries().is_empty());
}

#[test]
fn test_remove_entry_unknown_path() {
    let dir = TempDir::new().unwrap();
    let mut manager = manager_over(&dir);
    manager.refresh().unwrap();

    let result = manager.remove_entry(&dir.path().join("ghost.zip"));
    assert!(matches!(result, Err(ListingError::NotFound(_))));
}

// --- FileEntry display derivations ---

fn entry(name: &str, size: u64) -> FileEntry {
    FileEntry {
        name: name.to_string(),
        path: PathBuf::from("/downloads").join(name),
        size,
        modified: UNIX_EPOCH + Duration::from_secs(1_700_000_000),
    }
}

#[test]
fn test_formatted_size() {
    assert_eq!(entry("a", 0).formatted_size(), "0 B");
    assert_eq!(entry("a", 512).formatted_size(), "512.0 B");
    assert_eq!(entry("a", 1024).formatted_size(), "1.0 KB");
    assert_eq!(entry("a", 1536).formatted_size(), "1.5 KB");
    assert_eq!(entry("a", 5 * 1024 * 1024).formatted_size(), "5.0 MB");
}

#[test]
fn test_formatted_date_shape() {
    // Local timezone shifts the calendar day, so assert the shape only:
    // "dd Mon yyyy"
    let date = entry("a", 1).formatted_date();
    let parts: Vec<&str> = date.split(' ').collect();
    assert_eq!(parts.len(), 3, "unexpected date format: {}", date);
    assert_eq!(parts[0].len(), 2);
    assert_eq!(parts[1].len(), 3);
    assert_eq!(parts[2].len(), 4);
}

#[test]
fn test_type_label() {
    assert_eq!(entry("pack.zip", 1).type_label(), "application/zip");
    assert_eq!(entry("notes.txt", 1).type_label(), "text/plain");
    assert_eq!(entry("mystery.qqq", 1).type_label(), "Unknown");
    assert_eq!(entry("no_extension", 1).type_label(), "Unknown");
}
