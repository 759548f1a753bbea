// Dark Elixir platform paths for Windows
// Config:    %APPDATA%/DarkElixir
// Downloads: %USERPROFILE%/Downloads/DarkElixir

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory on Windows.
/// `%APPDATA%/DarkElixir`
pub fn get_config_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("DarkElixir")
}

/// Returns the downloads directory on Windows.
/// `%USERPROFILE%/Downloads/DarkElixir`
pub fn get_downloads_dir() -> PathBuf {
    let profile =
        env::var("USERPROFILE").unwrap_or_else(|_| String::from("C:\\Users\\Default"));
    PathBuf::from(profile).join("Downloads").join("DarkElixir")
}
