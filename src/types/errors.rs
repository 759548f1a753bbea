use std::fmt;

// === DownloadError ===

/// Errors related to the download provider and watcher.
#[derive(Debug)]
pub enum DownloadError {
    /// The handle is the sentinel / empty and cannot be tracked.
    InvalidHandle(String),
    /// A network error occurred while fetching the file.
    NetworkError(String),
    /// A file system error occurred while writing the file.
    FileSystemError(String),
    /// The provider could not be constructed (runtime or client setup).
    ProviderUnavailable(String),
}

impl fmt::Display for DownloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadError::InvalidHandle(handle) => {
                write!(f, "Invalid download handle: {}", handle)
            }
            DownloadError::NetworkError(msg) => write!(f, "Download network error: {}", msg),
            DownloadError::FileSystemError(msg) => {
                write!(f, "Download file system error: {}", msg)
            }
            DownloadError::ProviderUnavailable(msg) => {
                write!(f, "Download provider unavailable: {}", msg)
            }
        }
    }
}

impl std::error::Error for DownloadError {}

// === ListingError ===

/// Errors related to the downloads-folder listing.
#[derive(Debug)]
pub enum ListingError {
    /// The folder is missing or unreadable; the listing proceeds empty.
    FolderUnavailable(String),
    /// No listed entry matches the given path.
    NotFound(String),
    /// An I/O error occurred while reading or removing an entry.
    Io(String),
}

impl fmt::Display for ListingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingError::FolderUnavailable(msg) => {
                write!(f, "Downloads folder unavailable: {}", msg)
            }
            ListingError::NotFound(path) => write!(f, "File entry not found: {}", path),
            ListingError::Io(msg) => write!(f, "File listing I/O error: {}", msg),
        }
    }
}

impl std::error::Error for ListingError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

// === ThemeError ===

/// Errors related to theme engine operations.
#[derive(Debug)]
pub enum ThemeError {
    /// The provided color value is not a hex color.
    InvalidColor(String),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeError::InvalidColor(color) => write!(f, "Invalid color: {}", color),
        }
    }
}

impl std::error::Error for ThemeError {}
