//! Dark Elixir — a minimal desktop shell that wraps the Dark Elixir web app
//! in a WebView and mirrors its downloads into a native file-list screen.
//!
//! Entry point: opens the shell window. When built without the `gui`
//! feature, runs a console demo of the core components instead.

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("darkelixir=info")),
        )
        .init();
}

#[cfg(feature = "gui")]
fn main() {
    init_tracing();
    darkelixir::ui::webview_app::run();
}

#[cfg(not(feature = "gui"))]
fn main() {
    init_tracing();

    println!();
    println!("╔══════════════════════════════════════════════════════════╗");
    println!("║            Dark Elixir v{} — Demo Mode                ║", env!("CARGO_PKG_VERSION"));
    println!("║     WebView shell with a native downloads screen         ║");
    println!("╚══════════════════════════════════════════════════════════╝");
    println!();

    demo_settings();
    demo_theme();
    demo_file_names();
    demo_file_list();
    demo_watcher();

    println!();
    println!("════════════════════════════════════════════════════════════");
    println!("  ✅ All core components demonstrated successfully!");
    println!("════════════════════════════════════════════════════════════");
}

#[cfg(not(feature = "gui"))]
fn section(name: &str) {
    println!("──────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("──────────────────────────────────────────────────────────────");
}

#[cfg(not(feature = "gui"))]
fn demo_settings() {
    use darkelixir::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
    section("Settings Engine");

    let mut engine = SettingsEngine::new(Some("demo_settings.json".to_string()));
    let settings = engine.load().unwrap();
    println!("  Home URL: {}", settings.general.home_url);
    println!("  Theme: {:?}", settings.appearance.theme);

    engine.set_value("appearance.theme", serde_json::json!("Dark")).unwrap();
    println!("  Toggled theme to: {:?}", engine.get_settings().appearance.theme);

    engine.reset().unwrap();
    println!("  Reset: theme = {:?}", engine.get_settings().appearance.theme);
    let _ = std::fs::remove_file("demo_settings.json");
    println!("  ✓ SettingsEngine OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_theme() {
    use darkelixir::services::theme_engine::{ThemeEngine, ThemeEngineTrait};
    use darkelixir::types::settings::ThemeMode;
    section("Theme Engine");

    let mut engine = ThemeEngine::new(ThemeMode::Light);
    println!("  Current theme: {:?}", engine.get_theme());
    let vars = engine.get_css_variables();
    println!("  CSS variables ({} total), bg = {}", vars.len(), vars["--bg-primary"]);

    engine.toggle();
    println!("  Toggled to: {:?}, bg = {}", engine.get_theme(), engine.get_css_variables()["--bg-primary"]);
    println!("  ✓ ThemeEngine OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_file_names() {
    use darkelixir::services::download_provider::guess_file_name;
    section("File Name Guessing");

    println!("  plain URL        -> {}", guess_file_name("https://host/files/map.json", None, None));
    println!("  disposition wins -> {}", guess_file_name("https://host/dl?id=9", Some("attachment; filename=\"pack.zip\""), None));
    println!("  zip as bin       -> {}", guess_file_name("https://host/assets.zip", None, Some("application/octet-stream")));
    println!("  bare fallback    -> {}", guess_file_name("https://host/", None, None));
    println!("  ✓ guess_file_name OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_file_list() {
    use darkelixir::managers::file_list_manager::{FileListManager, FileListManagerTrait};
    section("File List Manager");

    let dir = std::env::temp_dir().join("darkelixir-demo");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("elixir-pack.zip"), vec![0u8; 2048]).unwrap();
    std::fs::write(dir.join("notes.txt"), b"hello").unwrap();

    let mut list = FileListManager::new(dir.clone());
    let count = list.refresh().unwrap();
    println!("  Listed {} file(s):", count);
    for entry in list.entries() {
        println!(
            "    {} — {} — {} — {}",
            entry.name,
            entry.formatted_size(),
            entry.formatted_date(),
            entry.type_label()
        );
    }

    let doomed = list.entries()[0].path.clone();
    list.remove_entry(&doomed).unwrap();
    println!("  Deleted one, remaining: {}", list.entries().len());
    let _ = std::fs::remove_dir_all(&dir);
    println!("  ✓ FileListManager OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_watcher() {
    use std::collections::VecDeque;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    use darkelixir::managers::download_watcher::{DownloadWatcher, DownloadWatcherTrait, PollOutcome};
    use darkelixir::services::download_provider::DownloadProvider;
    use darkelixir::types::download::{DownloadRecord, DownloadRequest, DownloadState};
    use darkelixir::types::errors::DownloadError;

    section("Download Watcher");

    /// Provider stand-in replaying a fixed status sequence.
    struct ReplayProvider {
        script: Mutex<VecDeque<Option<DownloadRecord>>>,
    }

    impl DownloadProvider for ReplayProvider {
        fn enqueue(&self, _request: DownloadRequest) -> Result<String, DownloadError> {
            Err(DownloadError::ProviderUnavailable("replay only".to_string()))
        }
        fn query(&self, _handle: &str) -> Option<DownloadRecord> {
            self.script.lock().unwrap().pop_front().flatten()
        }
    }

    let record = |state, downloaded, total| {
        Some(DownloadRecord {
            state,
            bytes_downloaded: downloaded,
            bytes_total: total,
            destination: PathBuf::from("/tmp/elixir-pack.zip"),
        })
    };

    let provider = Arc::new(ReplayProvider {
        script: Mutex::new(VecDeque::from(vec![
            record(DownloadState::Active, 0, 0),
            record(DownloadState::Active, 50, 100),
            record(DownloadState::Completed, 100, 100),
        ])),
    });

    let mut watcher = DownloadWatcher::new(provider);
    watcher.start("demo-handle").unwrap();

    loop {
        let outcome = watcher.poll();
        println!(
            "  poll -> {:?} at {}% ({:?})",
            outcome,
            watcher.percent(),
            watcher.snapshot().state
        );
        if outcome == PollOutcome::Stopped {
            break;
        }
    }

    println!("  Tracked handle after terminal: {:?}", watcher.handle());
    println!("  ✓ DownloadWatcher OK");
}
