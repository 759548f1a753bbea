// Dark Elixir platform paths for Linux
// Config:    ~/.config/darkelixir
// Downloads: ~/Downloads/darkelixir

use std::env;
use std::path::PathBuf;

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the configuration directory on Linux.
/// Uses `$XDG_CONFIG_HOME/darkelixir` if set, otherwise `~/.config/darkelixir`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("darkelixir")
    } else {
        home_dir().join(".config").join("darkelixir")
    }
}

/// Returns the downloads directory on Linux.
pub fn get_downloads_dir() -> PathBuf {
    home_dir().join("Downloads").join("darkelixir")
}
