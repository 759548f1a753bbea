use std::path::PathBuf;
use std::time::SystemTime;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Read-only view of one file in the downloads folder.
///
/// Bound to the listing snapshot it was taken in; the row goes stale if the
/// folder changes until the next manual refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
    pub modified: SystemTime,
}

impl FileEntry {
    /// Human-readable size, one decimal: "0 B", "12.0 KB", "1.4 MB".
    pub fn formatted_size(&self) -> String {
        format_size(self.size)
    }

    /// Last-modified date as "07 Aug 2026" in local time.
    pub fn formatted_date(&self) -> String {
        let local: DateTime<Local> = self.modified.into();
        local.format("%d %b %Y").to_string()
    }

    /// MIME type label guessed from the file extension, "Unknown" when the
    /// extension maps to nothing.
    pub fn type_label(&self) -> String {
        mime_guess::from_path(&self.path)
            .first()
            .map(|m| m.essence_str().to_string())
            .unwrap_or_else(|| "Unknown".to_string())
    }
}

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

fn format_size(size: u64) -> String {
    if size == 0 {
        return "0 B".to_string();
    }
    let mut value = size as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, SIZE_UNITS[unit])
}
