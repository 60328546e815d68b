//! On-disk configuration shape.
//!
//! The configuration file is a PostCSS pipeline description. Its full schema
//! is owned by PostCSS and the luchaocss plugin; this server only reads the
//! `prefix` and `theme` sub-fields of the luchaocss plugin entry and ignores
//! everything else.

use indexmap::IndexMap;
use serde::Deserialize;

/// Identifier of the plugin entry this server reads its settings from.
pub const PLUGIN_NAME: &str = "luchaocss";

/// Theme mapping: custom class name to its CSS property/value pairs.
///
/// `IndexMap` keeps the configuration file's insertion order, which is the
/// order theme-derived suggestions are emitted in.
pub type ThemeMap = IndexMap<String, IndexMap<String, String>>;

/// A decoded configuration pipeline (`postcss.config.*`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigPipeline {
    #[serde(default)]
    pub plugins: Vec<PluginEntry>,
}

/// One entry of the `plugins` sequence.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PluginEntry {
    #[serde(rename = "postcssPlugin")]
    pub postcss_plugin: Option<String>,
    pub config: Option<PluginConfig>,
}

/// The luchaocss plugin's `config` sub-object. Both fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PluginConfig {
    pub prefix: Option<String>,
    pub theme: Option<ThemeMap>,
}

impl ConfigPipeline {
    /// Find the luchaocss plugin entry and return its `config` sub-object.
    pub fn plugin_config(&self) -> Option<&PluginConfig> {
        self.plugins
            .iter()
            .find(|entry| entry.postcss_plugin.as_deref() == Some(PLUGIN_NAME))
            .and_then(|entry| entry.config.as_ref())
    }
}
