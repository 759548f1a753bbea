//! File list manager for the downloads screen.
//!
//! Takes point-in-time snapshots of a fixed destination folder; no
//! file-system watch, refresh is a manual action. A missing or unreadable
//! folder empties the listing and reports `FolderUnavailable` — the screen
//! shows an informational message and renders the empty list.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use tracing::{debug, warn};

use crate::types::errors::ListingError;
use crate::types::file_entry::FileEntry;

/// Trait defining file list operations.
pub trait FileListManagerTrait {
    fn refresh(&mut self) -> Result<usize, ListingError>;
    fn entries(&self) -> &[FileEntry];
    fn entry_at(&self, index: usize) -> Option<&FileEntry>;
    fn remove_entry(&mut self, path: &Path) -> Result<(), ListingError>;
}

/// Snapshot listing of one downloads folder, newest first.
pub struct FileListManager {
    folder: PathBuf,
    entries: Vec<FileEntry>,
}

impl FileListManager {
    pub fn new(folder: PathBuf) -> Self {
        Self {
            folder,
            entries: Vec::new(),
        }
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }
}

impl FileListManagerTrait for FileListManager {
    /// Re-reads the folder and replaces the snapshot. Returns the number of
    /// files listed. Subdirectories are skipped.
    fn refresh(&mut self) -> Result<usize, ListingError> {
        self.entries.clear();

        let dir = fs::read_dir(&self.folder).map_err(|e| {
            warn!(folder = %self.folder.display(), error = %e, "downloads folder unavailable");
            ListingError::FolderUnavailable(format!("{}: {}", self.folder.display(), e))
        })?;

        for entry in dir {
            let entry = entry.map_err(|e| ListingError::Io(e.to_string()))?;
            let metadata = entry.metadata().map_err(|e| ListingError::Io(e.to_string()))?;
            if !metadata.is_file() {
                continue;
            }
            self.entries.push(FileEntry {
                name: entry.file_name().to_string_lossy().to_string(),
                path: entry.path(),
                size: metadata.len(),
                modified: metadata.modified().unwrap_or(UNIX_EPOCH),
            });
        }

        self.entries
            .sort_by(|a, b| b.modified.cmp(&a.modified).then_with(|| a.name.cmp(&b.name)));

        debug!(count = self.entries.len(), "downloads folder refreshed");
        Ok(self.entries.len())
    }

    fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    fn entry_at(&self, index: usize) -> Option<&FileEntry> {
        self.entries.get(index)
    }

    /// Deletes the file behind a listed entry and drops its row.
    fn remove_entry(&mut self, path: &Path) -> Result<(), ListingError> {
        let index = self
            .entries
            .iter()
            .position(|e| e.path == path)
            .ok_or_else(|| ListingError::NotFound(path.display().to_string()))?;

        fs::remove_file(path).map_err(|e| ListingError::Io(e.to_string()))?;
        self.entries.remove(index);
        Ok(())
    }
}
