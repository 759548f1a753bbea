use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Coarse state of one download as seen by the watcher.
///
/// `Unknown` is what the watcher derives when the provider no longer has a
/// record for the tracked handle; the provider itself never reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DownloadState {
    Active,
    Completed,
    Failed,
    Unknown,
}

impl DownloadState {
    /// Terminal states never change again for a given handle.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            DownloadState::Completed | DownloadState::Failed | DownloadState::Unknown
        )
    }
}

/// Snapshot of a download taken at one poll. Never persisted; the percent
/// is recomputed from the byte counters on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadSnapshot {
    pub state: DownloadState,
    pub bytes_downloaded: u64,
    pub bytes_total: u64,
}

impl DownloadSnapshot {
    /// Progress as a whole percentage, `floor(downloaded * 100 / total)`.
    /// A total of zero (size not yet known) reads as 0%, never a division
    /// by zero.
    pub fn percent(&self) -> u32 {
        if self.bytes_total > 0 {
            ((self.bytes_downloaded as u128 * 100) / self.bytes_total as u128) as u32
        } else {
            0
        }
    }
}

impl Default for DownloadSnapshot {
    fn default() -> Self {
        Self {
            state: DownloadState::Unknown,
            bytes_downloaded: 0,
            bytes_total: 0,
        }
    }
}

/// One row of the provider's status table, as returned by `query`.
/// Correlates the handle with the destination path so display layers can
/// match a file row against the tracked download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRecord {
    pub state: DownloadState,
    pub bytes_downloaded: u64,
    pub bytes_total: u64,
    pub destination: PathBuf,
}

impl DownloadRecord {
    pub fn snapshot(&self) -> DownloadSnapshot {
        DownloadSnapshot {
            state: self.state,
            bytes_downloaded: self.bytes_downloaded,
            bytes_total: self.bytes_total,
        }
    }
}

/// An enqueue request handed to the download provider.
#[derive(Debug, Clone)]
pub struct DownloadRequest {
    pub url: String,
    /// Final file name inside `destination_dir`.
    pub file_name: String,
    pub destination_dir: PathBuf,
    pub user_agent: Option<String>,
    pub mime_type: Option<String>,
}
