//! Resolved workspace settings as required by the domain.

use crate::config::schema::{PluginConfig, ThemeMap};

/// Class-name prefix used when no configuration provides one.
pub const DEFAULT_PREFIX: &str = "g";

/// Settings the completion engine runs against.
///
/// Resolved once during initialization and treated as read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Non-empty prefix prepended to every static utility class name.
    pub prefix: String,
    /// Custom class names and their CSS property/value pairs, in
    /// configuration-file order.
    pub theme: ThemeMap,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            theme: ThemeMap::new(),
        }
    }
}

impl Settings {
    /// The string the client uses to re-trigger completion automatically,
    /// e.g. `g-` for the default prefix.
    pub fn trigger_string(&self) -> String {
        format!("{}-", self.prefix)
    }
}

impl From<PluginConfig> for Settings {
    fn from(config: PluginConfig) -> Self {
        let mut settings = Settings::default();
        // An empty configured prefix would produce labels like `--m-`;
        // treat it as absent to keep the non-empty prefix invariant.
        if let Some(prefix) = config.prefix.filter(|p| !p.is_empty()) {
            settings.prefix = prefix;
        }
        if let Some(theme) = config.theme {
            settings.theme = theme;
        }
        settings
    }
}
