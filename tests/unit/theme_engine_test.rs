//! Unit tests for the ThemeEngine public API.

use darkelixir::services::theme_engine::{ThemeEngine, ThemeEngineTrait};
use darkelixir::types::settings::ThemeMode;

#[test]
fn test_initial_mode_is_respected() {
    let engine = ThemeEngine::new(ThemeMode::Dark);
    assert_eq!(engine.get_theme(), ThemeMode::Dark);
}

#[test]
fn test_toggle_round_trips() {
    let mut engine = ThemeEngine::new(ThemeMode::Light);
    assert_eq!(engine.toggle(), ThemeMode::Dark);
    assert_eq!(engine.toggle(), ThemeMode::Light);
    assert_eq!(engine.get_theme(), ThemeMode::Light);
}

/// Every variable the downloads page references must exist in both modes.
#[test]
fn test_css_variables_complete_in_both_modes() {
    let required = [
        "--bg-primary",
        "--bg-row",
        "--text-primary",
        "--text-secondary",
        "--border-color",
        "--progress-track",
        "--accent-color",
        "--status-active",
        "--status-done",
    ];

    for mode in [ThemeMode::Dark, ThemeMode::Light] {
        let vars = ThemeEngine::new(mode).get_css_variables();
        for key in required {
            assert!(vars.contains_key(key), "{:?} palette missing {}", mode, key);
        }
    }
}

#[test]
fn test_dark_and_light_palettes_differ() {
    let dark = ThemeEngine::new(ThemeMode::Dark).get_css_variables();
    let light = ThemeEngine::new(ThemeMode::Light).get_css_variables();
    assert_ne!(dark["--bg-primary"], light["--bg-primary"]);
    assert_ne!(dark["--bg-row"], light["--bg-row"]);
    assert_ne!(dark["--text-primary"], light["--text-primary"]);
}

#[test]
fn test_accent_color_validation() {
    let mut engine = ThemeEngine::new(ThemeMode::Light);

    assert!(engine.set_accent_color("#ff6600").is_ok());
    assert_eq!(engine.get_accent_color(), "#ff6600");
    assert_eq!(engine.get_css_variables()["--accent-color"], "#ff6600");

    assert!(engine.set_accent_color("").is_err());
    assert!(engine.set_accent_color("red").is_err());
    assert!(engine.set_accent_color("#12345").is_err());
    assert!(engine.set_accent_color("#zzzzzz").is_err());
    assert_eq!(engine.get_accent_color(), "#ff6600");
}
