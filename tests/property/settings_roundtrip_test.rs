//! Property-based tests for AppSettings serialization round-trip.
//!
//! Whatever the settings hold, serializing to JSON and back must lose
//! nothing — the settings file is rewritten on every toggle, so a lossy
//! round-trip would silently corrupt preferences.

use darkelixir::types::settings::{
    AppSettings, AppearanceSettings, GeneralSettings, ThemeMode,
};
use proptest::prelude::*;

fn arb_theme_mode() -> impl Strategy<Value = ThemeMode> {
    prop_oneof![Just(ThemeMode::Dark), Just(ThemeMode::Light)]
}

fn arb_general_settings() -> impl Strategy<Value = GeneralSettings> {
    (
        "https?://[a-z0-9./-]{1,40}",
        prop::option::of("[a-zA-Z0-9/._-]{1,30}"),
    )
        .prop_map(|(home_url, downloads_dir)| GeneralSettings {
            home_url,
            downloads_dir,
        })
}

fn arb_appearance_settings() -> impl Strategy<Value = AppearanceSettings> {
    (arb_theme_mode(), "#[0-9a-f]{6}").prop_map(|(theme, accent_color)| AppearanceSettings {
        theme,
        accent_color,
    })
}

fn arb_app_settings() -> impl Strategy<Value = AppSettings> {
    (arb_general_settings(), arb_appearance_settings())
        .prop_map(|(general, appearance)| AppSettings { general, appearance })
}

proptest! {
    #[test]
    fn settings_roundtrip_via_json(settings in arb_app_settings()) {
        let json = serde_json::to_string(&settings).unwrap();
        let restored: AppSettings = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(restored, settings);
    }

    /// Pretty-printing (the on-disk form) round-trips identically.
    #[test]
    fn settings_roundtrip_via_pretty_json(settings in arb_app_settings()) {
        let json = serde_json::to_string_pretty(&settings).unwrap();
        let restored: AppSettings = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(restored, settings);
    }
}

#[test]
fn test_default_settings_roundtrip() {
    let defaults = AppSettings::default();
    let json = serde_json::to_string(&defaults).unwrap();
    let restored: AppSettings = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, defaults);
}
