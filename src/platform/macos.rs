// Dark Elixir platform paths for macOS
// Config:    ~/Library/Application Support/DarkElixir
// Downloads: ~/Downloads/DarkElixir

use std::env;
use std::path::PathBuf;

/// Returns the home directory on macOS.
fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the configuration directory on macOS.
/// `~/Library/Application Support/DarkElixir`
pub fn get_config_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("DarkElixir")
}

/// Returns the downloads directory on macOS.
/// `~/Downloads/DarkElixir`
pub fn get_downloads_dir() -> PathBuf {
    home_dir().join("Downloads").join("DarkElixir")
}
