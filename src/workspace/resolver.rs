//! Workspace settings resolution.
//!
//! Runs once per activation: locate the configuration file, decode it, and
//! extract the luchaocss plugin settings. Every failure path degrades to
//! [`Settings::default`] and surfaces exactly one user-visible warning; the
//! specific cause only goes to the log channel.

use std::path::Path;

use crate::config::{PLUGIN_NAME, Settings};
use crate::workspace::loader::{CONFIG_STEM, ConfigLoader};

/// Warning shown when no usable configuration is found: install the
/// dependency that provides the config format.
pub const INSTALL_HINT: &str = "npm install luchaocss --save";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsEventKind {
    Info,
    Warning,
}

/// A record of something that happened while resolving settings.
///
/// The resolver is pure with respect to the client connection; the LSP layer
/// decides how events surface (log message vs. shown warning).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsEvent {
    pub kind: SettingsEventKind,
    pub message: String,
}

impl SettingsEvent {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: SettingsEventKind::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: SettingsEventKind::Warning,
            message: message.into(),
        }
    }
}

/// Result of one resolution run: the effective settings plus the events to
/// report. `settings` is always populated; failures fall back to defaults.
#[derive(Debug)]
pub struct SettingsLoadOutcome {
    pub settings: Settings,
    pub events: Vec<SettingsEvent>,
}

impl SettingsLoadOutcome {
    /// Outcome for a resolution that never ran to completion (worker panic
    /// or timeout): defaults plus the single install-hint warning.
    pub fn fallback(cause: impl Into<String>) -> Self {
        Self {
            settings: Settings::default(),
            events: vec![
                SettingsEvent::info(cause),
                SettingsEvent::warning(INSTALL_HINT),
            ],
        }
    }
}

/// Resolve the workspace settings for `root_path`.
///
/// Missing root, missing file, unreadable or unparseable file, and a
/// pipeline without a luchaocss entry all yield default settings and one
/// warning event. Success yields the decoded settings and no warning.
pub fn resolve_settings(
    root_path: Option<&Path>,
    loader: &dyn ConfigLoader,
) -> SettingsLoadOutcome {
    let mut events = Vec::new();

    let settings = match extract_settings(root_path, loader, &mut events) {
        Some(settings) => settings,
        None => {
            events.push(SettingsEvent::warning(INSTALL_HINT));
            Settings::default()
        }
    };

    SettingsLoadOutcome { settings, events }
}

fn extract_settings(
    root_path: Option<&Path>,
    loader: &dyn ConfigLoader,
    events: &mut Vec<SettingsEvent>,
) -> Option<Settings> {
    let Some(root) = root_path else {
        events.push(SettingsEvent::info(
            "No workspace root; using default settings",
        ));
        return None;
    };

    let Some(config_path) = loader.locate(root) else {
        events.push(SettingsEvent::info(format!(
            "No {}.* file found under {}",
            CONFIG_STEM,
            root.display()
        )));
        return None;
    };

    events.push(SettingsEvent::info(format!(
        "Found config file: {}",
        config_path.display()
    )));

    let pipeline = match loader.load(&config_path) {
        Ok(pipeline) => pipeline,
        Err(err) => {
            events.push(SettingsEvent::info(err.to_string()));
            return None;
        }
    };

    let Some(plugin_config) = pipeline.plugin_config() else {
        events.push(SettingsEvent::info(format!(
            "No {} plugin entry in {}",
            PLUGIN_NAME,
            config_path.display()
        )));
        return None;
    };

    let settings = Settings::from(plugin_config.clone());
    events.push(SettingsEvent::info(format!(
        "Loaded {} settings from {} (prefix: {})",
        PLUGIN_NAME,
        config_path.display(),
        settings.prefix
    )));
    Some(settings)
}
