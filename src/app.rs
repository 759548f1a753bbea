//! App Core for Dark Elixir.
//!
//! Central struct holding the engines, the download provider, the watcher,
//! and the downloads-folder listing, managing application lifecycle.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::warn;

use crate::managers::download_watcher::DownloadWatcher;
use crate::managers::file_list_manager::FileListManager;
use crate::platform;
use crate::services::download_provider::HttpDownloadProvider;
use crate::services::settings_engine::SettingsEngine;
use crate::services::theme_engine::ThemeEngine;

/// Central application struct.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub theme_engine: ThemeEngine,
    pub provider: Arc<HttpDownloadProvider>,
    pub watcher: DownloadWatcher,
    pub file_list: FileListManager,
    pub downloads_dir: PathBuf,
}

impl App {
    /// Creates a new App with all components wired together.
    ///
    /// `settings_path_override` points the settings engine at a non-default
    /// file (used by tests); `None` uses the platform config dir.
    pub fn new(settings_path_override: Option<String>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings_engine = SettingsEngine::new(settings_path_override);
        {
            use crate::services::settings_engine::SettingsEngineTrait;
            let _ = settings_engine.load();
        }

        let downloads_dir = {
            use crate::services::settings_engine::SettingsEngineTrait;
            settings_engine
                .get_settings()
                .general
                .downloads_dir
                .as_ref()
                .map(PathBuf::from)
                .unwrap_or_else(platform::get_downloads_dir)
        };

        let theme_engine = {
            use crate::services::settings_engine::SettingsEngineTrait;
            ThemeEngine::new(settings_engine.get_settings().appearance.theme)
        };

        let provider = Arc::new(HttpDownloadProvider::new()?);
        let watcher = DownloadWatcher::new(provider.clone());
        let file_list = FileListManager::new(downloads_dir.clone());

        Ok(Self {
            settings_engine,
            theme_engine,
            provider,
            watcher,
            file_list,
            downloads_dir,
        })
    }

    /// Startup sequence: apply the persisted theme, ensure the downloads
    /// folder exists, take the first listing snapshot.
    pub fn startup(&mut self) {
        use crate::managers::file_list_manager::FileListManagerTrait;
        use crate::services::settings_engine::SettingsEngineTrait;
        use crate::services::theme_engine::ThemeEngineTrait;

        let settings = self.settings_engine.get_settings().clone();
        self.theme_engine.set_theme(settings.appearance.theme);
        if let Err(e) = self
            .theme_engine
            .set_accent_color(&settings.appearance.accent_color)
        {
            warn!(error = %e, "ignoring persisted accent color");
        }

        if let Err(e) = std::fs::create_dir_all(&self.downloads_dir) {
            warn!(dir = %self.downloads_dir.display(), error = %e, "cannot create downloads dir");
        }

        let _ = self.file_list.refresh();
    }

    /// Shutdown sequence: let the pending poll lapse.
    pub fn shutdown(&mut self) {
        use crate::managers::download_watcher::DownloadWatcherTrait;
        self.watcher.stop();
    }
}
