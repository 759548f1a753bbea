use serde::{Deserialize, Serialize};

/// Top-level application settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppSettings {
    pub general: GeneralSettings,
    pub appearance: AppearanceSettings,
}

/// General settings: the wrapped page and where downloads land.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralSettings {
    /// The single remote page the shell wraps.
    pub home_url: String,
    /// Override for the downloads folder; `None` means the platform default.
    pub downloads_dir: Option<String>,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            home_url: "https://dark-elixir-project.vercel.app/".to_string(),
            downloads_dir: None,
        }
    }
}

/// Appearance settings persisted across runs (the downloads screen's
/// theme toggle writes through here).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppearanceSettings {
    pub theme: ThemeMode,
    pub accent_color: String,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Light,
            accent_color: "#2196f3".to_string(),
        }
    }
}

/// Theme mode selection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}
