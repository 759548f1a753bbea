//! Theme Engine — dark/light palettes and CSS variables for the downloads
//! screen. The active mode is persisted by the settings engine; this engine
//! only derives presentation from it.

use std::collections::HashMap;

use crate::types::errors::ThemeError;
use crate::types::settings::ThemeMode;

/// Trait defining the theme engine interface.
pub trait ThemeEngineTrait {
    fn set_theme(&mut self, mode: ThemeMode);
    fn get_theme(&self) -> ThemeMode;
    fn toggle(&mut self) -> ThemeMode;
    fn set_accent_color(&mut self, color: &str) -> Result<(), ThemeError>;
    fn get_accent_color(&self) -> &str;
    fn get_css_variables(&self) -> HashMap<String, String>;
}

/// Dark palette for the downloads screen.
struct DarkPalette;
impl DarkPalette {
    const BG_PRIMARY: &'static str = "#121212";
    const BG_ROW: &'static str = "#1e1e1e";
    const TEXT_PRIMARY: &'static str = "#e6e6e6";
    const TEXT_SECONDARY: &'static str = "#9e9e9e";
    const BORDER: &'static str = "#2c2c2c";
    const TRACK: &'static str = "#333333";
}

/// Light palette for the downloads screen.
struct LightPalette;
impl LightPalette {
    const BG_PRIMARY: &'static str = "#fafafa";
    const BG_ROW: &'static str = "#ffffff";
    const TEXT_PRIMARY: &'static str = "#212121";
    const TEXT_SECONDARY: &'static str = "#757575";
    const BORDER: &'static str = "#e0e0e0";
    const TRACK: &'static str = "#eeeeee";
}

/// Status text colors shared by both palettes: blue while downloading,
/// green once done.
const STATUS_ACTIVE: &str = "#2196f3";
const STATUS_DONE: &str = "#4caf50";

/// Validates a hex color string (e.g. "#2196f3" or "#fff").
fn is_valid_hex_color(color: &str) -> bool {
    if !color.starts_with('#') {
        return false;
    }
    let hex = &color[1..];
    matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
}

/// The theme engine implementation.
pub struct ThemeEngine {
    current_theme: ThemeMode,
    accent_color: String,
}

impl ThemeEngine {
    /// Creates a new ThemeEngine with the given initial mode.
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            current_theme: mode,
            accent_color: STATUS_ACTIVE.to_string(),
        }
    }

    fn palette(&self) -> [(&'static str, &'static str); 6] {
        match self.current_theme {
            ThemeMode::Dark => [
                ("--bg-primary", DarkPalette::BG_PRIMARY),
                ("--bg-row", DarkPalette::BG_ROW),
                ("--text-primary", DarkPalette::TEXT_PRIMARY),
                ("--text-secondary", DarkPalette::TEXT_SECONDARY),
                ("--border-color", DarkPalette::BORDER),
                ("--progress-track", DarkPalette::TRACK),
            ],
            ThemeMode::Light => [
                ("--bg-primary", LightPalette::BG_PRIMARY),
                ("--bg-row", LightPalette::BG_ROW),
                ("--text-primary", LightPalette::TEXT_PRIMARY),
                ("--text-secondary", LightPalette::TEXT_SECONDARY),
                ("--border-color", LightPalette::BORDER),
                ("--progress-track", LightPalette::TRACK),
            ],
        }
    }
}

impl ThemeEngineTrait for ThemeEngine {
    fn set_theme(&mut self, mode: ThemeMode) {
        self.current_theme = mode;
    }

    fn get_theme(&self) -> ThemeMode {
        self.current_theme
    }

    /// Flips dark/light and returns the new mode.
    fn toggle(&mut self) -> ThemeMode {
        self.current_theme = self.current_theme.toggled();
        self.current_theme
    }

    fn set_accent_color(&mut self, color: &str) -> Result<(), ThemeError> {
        if !is_valid_hex_color(color) {
            return Err(ThemeError::InvalidColor(color.to_string()));
        }
        self.accent_color = color.to_string();
        Ok(())
    }

    fn get_accent_color(&self) -> &str {
        &self.accent_color
    }

    fn get_css_variables(&self) -> HashMap<String, String> {
        let mut vars: HashMap<String, String> = self
            .palette()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        vars.insert("--accent-color".to_string(), self.accent_color.clone());
        vars.insert("--status-active".to_string(), STATUS_ACTIVE.to_string());
        vars.insert("--status-done".to_string(), STATUS_DONE.to_string());
        vars
    }
}
