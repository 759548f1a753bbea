//! Download status watcher.
//!
//! Tracks one in-flight download against the provider's status table on a
//! fixed 500 ms cadence. Each poll is one synchronous query plus a derived
//! snapshot update; the caller owns the schedule and either re-arms it or
//! lets it lapse based on the returned outcome. At most one handle is
//! tracked per watcher instance; starting a new handle replaces the old one.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::services::download_provider::DownloadProvider;
use crate::types::download::{DownloadSnapshot, DownloadState};
use crate::types::errors::DownloadError;

/// Fixed poll cadence. Cheap and idempotent, so no backoff.
pub const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// What the caller should do with the schedule after a poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// The download is still running; poll again after `POLL_INTERVAL`.
    Reschedule,
    /// A terminal state was observed (or nothing is tracked); the schedule
    /// is disarmed and further polls are no-ops until the next `start`.
    Stopped,
}

/// Trait defining the watcher interface.
pub trait DownloadWatcherTrait {
    fn start(&mut self, handle: &str) -> Result<(), DownloadError>;
    fn poll(&mut self) -> PollOutcome;
    fn stop(&mut self);
    fn is_tracking(&self, path: &Path) -> bool;
    fn handle(&self) -> Option<&str>;
    fn snapshot(&self) -> &DownloadSnapshot;
}

/// Watcher over one download handle.
///
/// State machine: idle → `Active` → {`Completed`, `Failed`, `Unknown`},
/// all terminal until an explicit new `start`. The handle field is the
/// "current download" sentinel: `None` means nothing is tracked.
pub struct DownloadWatcher {
    provider: Arc<dyn DownloadProvider>,
    current: Option<String>,
    snapshot: DownloadSnapshot,
    scheduled: bool,
}

impl DownloadWatcher {
    pub fn new(provider: Arc<dyn DownloadProvider>) -> Self {
        Self {
            provider,
            current: None,
            snapshot: DownloadSnapshot::default(),
            scheduled: false,
        }
    }

    /// Progress of the tracked download as a whole percentage.
    pub fn percent(&self) -> u32 {
        self.snapshot.percent()
    }

    fn finish(&mut self, state: DownloadState) -> PollOutcome {
        self.snapshot.state = state;
        self.current = None;
        self.scheduled = false;
        debug!(?state, "watcher stopped");
        PollOutcome::Stopped
    }
}

impl DownloadWatcherTrait for DownloadWatcher {
    /// Begins tracking `handle`. The first poll is due immediately.
    fn start(&mut self, handle: &str) -> Result<(), DownloadError> {
        if handle.is_empty() {
            return Err(DownloadError::InvalidHandle(handle.to_string()));
        }
        self.current = Some(handle.to_string());
        self.snapshot = DownloadSnapshot {
            state: DownloadState::Active,
            bytes_downloaded: 0,
            bytes_total: 0,
        };
        self.scheduled = true;
        debug!(handle, "watcher started");
        Ok(())
    }

    /// One poll: query the provider, update the snapshot, decide the
    /// schedule. A no-op unless armed by `start`.
    fn poll(&mut self) -> PollOutcome {
        if !self.scheduled {
            return PollOutcome::Stopped;
        }
        let handle = match &self.current {
            Some(h) => h.clone(),
            None => return PollOutcome::Stopped,
        };

        let record = match self.provider.query(&handle) {
            Some(r) => r,
            // Handle no longer resolvable: terminal, silent.
            None => return self.finish(DownloadState::Unknown),
        };

        self.snapshot.bytes_downloaded = record.bytes_downloaded;
        self.snapshot.bytes_total = record.bytes_total;

        if record.state.is_terminal() {
            // The caller sees Stopped and paints the terminal snapshot once more.
            self.finish(record.state)
        } else {
            self.snapshot.state = DownloadState::Active;
            PollOutcome::Reschedule
        }
    }

    /// Cancels any pending schedule. Idempotent; does not forget the handle.
    fn stop(&mut self) {
        self.scheduled = false;
    }

    /// Whether `path` is the destination of the currently tracked download.
    /// Comparison is by resolved file path, since the provider correlates
    /// handle → destination.
    fn is_tracking(&self, path: &Path) -> bool {
        let handle = match &self.current {
            Some(h) => h,
            None => return false,
        };
        match self.provider.query(handle) {
            Some(record) => record.destination == path,
            None => false,
        }
    }

    fn handle(&self) -> Option<&str> {
        self.current.as_deref()
    }

    fn snapshot(&self) -> &DownloadSnapshot {
        &self.snapshot
    }
}
