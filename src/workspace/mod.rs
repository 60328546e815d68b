pub mod documents;
pub mod loader;
pub mod resolver;

pub use documents::{Document, DocumentStore};
pub use loader::{CONFIG_STEM, ConfigError, ConfigLoader, FsConfigLoader, IGNORED_DIRS};
pub use resolver::{
    INSTALL_HINT, SettingsEvent, SettingsEventKind, SettingsLoadOutcome, resolve_settings,
};
