//! Settings resolution against real directories.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use luchaocss_ls::config::Settings;
use luchaocss_ls::workspace::{
    FsConfigLoader, INSTALL_HINT, SettingsEventKind, SettingsLoadOutcome, resolve_settings,
};

fn write_config(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

fn warnings(outcome: &SettingsLoadOutcome) -> Vec<&str> {
    outcome
        .events
        .iter()
        .filter(|event| event.kind == SettingsEventKind::Warning)
        .map(|event| event.message.as_str())
        .collect()
}

#[test]
fn root_without_config_yields_defaults_and_one_warning() {
    let root = TempDir::new().unwrap();

    let outcome = resolve_settings(Some(root.path()), &FsConfigLoader);

    assert_eq!(outcome.settings, Settings::default());
    assert_eq!(warnings(&outcome), vec![INSTALL_HINT]);
}

#[test]
fn well_formed_config_yields_settings_and_no_warning() {
    let root = TempDir::new().unwrap();
    write_config(
        root.path(),
        "postcss.config.json",
        r#"{
            "plugins": [{
                "postcssPlugin": "luchaocss",
                "config": {
                    "prefix": "x",
                    "theme": { "foo": { "color": "red" } }
                }
            }]
        }"#,
    );

    let outcome = resolve_settings(Some(root.path()), &FsConfigLoader);

    assert_eq!(outcome.settings.prefix, "x");
    assert_eq!(outcome.settings.theme["foo"]["color"], "red");
    assert!(warnings(&outcome).is_empty());
}

#[test]
fn config_inside_ignored_directory_is_not_picked_up() {
    let root = TempDir::new().unwrap();
    write_config(
        root.path(),
        "node_modules/some-pkg/postcss.config.json",
        r#"{ "plugins": [{ "postcssPlugin": "luchaocss", "config": { "prefix": "bad" } }] }"#,
    );

    let outcome = resolve_settings(Some(root.path()), &FsConfigLoader);

    assert_eq!(outcome.settings, Settings::default());
    assert_eq!(warnings(&outcome).len(), 1);
}

#[test]
fn nested_config_is_found() {
    let root = TempDir::new().unwrap();
    write_config(
        root.path(),
        "packages/web/postcss.config.json",
        r#"{ "plugins": [{ "postcssPlugin": "luchaocss", "config": { "prefix": "web" } }] }"#,
    );

    let outcome = resolve_settings(Some(root.path()), &FsConfigLoader);

    assert_eq!(outcome.settings.prefix, "web");
    assert!(warnings(&outcome).is_empty());
}

#[test]
fn unparseable_config_falls_back_with_one_warning() {
    let root = TempDir::new().unwrap();
    // A JavaScript config cannot be evaluated by this server.
    write_config(
        root.path(),
        "postcss.config.js",
        "module.exports = { plugins: [] };",
    );

    let outcome = resolve_settings(Some(root.path()), &FsConfigLoader);

    assert_eq!(outcome.settings, Settings::default());
    assert_eq!(warnings(&outcome), vec![INSTALL_HINT]);
}

#[test]
fn config_without_luchaocss_entry_falls_back_with_one_warning() {
    let root = TempDir::new().unwrap();
    write_config(
        root.path(),
        "postcss.config.json",
        r#"{ "plugins": [{ "postcssPlugin": "autoprefixer" }] }"#,
    );

    let outcome = resolve_settings(Some(root.path()), &FsConfigLoader);

    assert_eq!(outcome.settings, Settings::default());
    assert_eq!(warnings(&outcome), vec![INSTALL_HINT]);
}

#[test]
fn prefix_only_config_keeps_empty_theme() {
    let root = TempDir::new().unwrap();
    write_config(
        root.path(),
        "postcss.config.json",
        r#"{ "plugins": [{ "postcssPlugin": "luchaocss", "config": { "prefix": "u" } }] }"#,
    );

    let outcome = resolve_settings(Some(root.path()), &FsConfigLoader);

    assert_eq!(outcome.settings.prefix, "u");
    assert!(outcome.settings.theme.is_empty());
    assert!(warnings(&outcome).is_empty());
}

#[test]
fn resolution_is_deterministic_with_multiple_candidates() {
    let root = TempDir::new().unwrap();
    write_config(
        root.path(),
        "a/postcss.config.json",
        r#"{ "plugins": [{ "postcssPlugin": "luchaocss", "config": { "prefix": "a" } }] }"#,
    );
    write_config(
        root.path(),
        "b/postcss.config.json",
        r#"{ "plugins": [{ "postcssPlugin": "luchaocss", "config": { "prefix": "b" } }] }"#,
    );

    let first = resolve_settings(Some(root.path()), &FsConfigLoader);
    let second = resolve_settings(Some(root.path()), &FsConfigLoader);

    // Exactly one file is chosen and the choice is stable.
    assert_eq!(first.settings, second.settings);
    assert!(warnings(&first).is_empty());
}
