//! Settings state for the LSP server.
//!
//! Settings are resolved once during `initialize()` and read on every
//! completion request afterwards, so they live in an `ArcSwap`: one writer
//! at startup, lock-free readers from then on.

use arc_swap::ArcSwap;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Settings;

pub(crate) struct SettingsManager {
    root_path: ArcSwap<Option<PathBuf>>,
    settings: ArcSwap<Settings>,
}

impl std::fmt::Debug for SettingsManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsManager")
            .field("root_path", &"ArcSwap<Option<PathBuf>>")
            .field("settings", &"ArcSwap<Settings>")
            .finish()
    }
}

impl Default for SettingsManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsManager {
    pub(crate) fn new() -> Self {
        Self {
            root_path: ArcSwap::new(Arc::new(None)),
            settings: ArcSwap::new(Arc::new(Settings::default())),
        }
    }

    /// Store the workspace root derived during `initialize()`.
    pub(crate) fn set_root_path(&self, path: Option<PathBuf>) {
        self.root_path.store(Arc::new(path));
    }

    pub(crate) fn root_path(&self) -> Arc<Option<PathBuf>> {
        self.root_path.load_full()
    }

    /// Freeze the resolved settings.
    pub(crate) fn apply_settings(&self, settings: Settings) {
        self.settings.store(Arc::new(settings));
    }

    pub(crate) fn load_settings(&self) -> Arc<Settings> {
        self.settings.load_full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_default_settings() {
        let manager = SettingsManager::new();
        assert_eq!(*manager.load_settings(), Settings::default());
        assert!(manager.root_path().is_none());
    }

    #[test]
    fn applied_settings_are_returned() {
        let manager = SettingsManager::new();
        let settings = Settings {
            prefix: "x".to_string(),
            ..Settings::default()
        };

        manager.apply_settings(settings.clone());
        assert_eq!(*manager.load_settings(), settings);
    }

    #[test]
    fn root_path_round_trips() {
        let manager = SettingsManager::new();
        manager.set_root_path(Some(PathBuf::from("/proj")));
        assert_eq!(*manager.root_path(), Some(PathBuf::from("/proj")));
    }
}
