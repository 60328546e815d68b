pub mod schema;
pub mod settings;

pub use schema::{ConfigPipeline, PLUGIN_NAME, PluginConfig, PluginEntry, ThemeMap};
pub use settings::{DEFAULT_PREFIX, Settings};
