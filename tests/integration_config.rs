// txsync: Transifex translation sync tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Exercises the layered loader with real files on disk.

use std::path::Path;
use tempfile::TempDir;
use txsync::config::Config;
use txsync::config::loader::ConfigSource;
use txsync::config::types::ResourceKind;
use txsync::error::ConfigError;
use txsync::utility::encoding::OutputEncoding;

const PROJECT_TOML: &str = r#"
[transifex]
url = "https://www.transifex.com/api/2/project/Demo/"
threshold = 50
jobs = 4

[paths]
root = "/work/app"
strings = "Resources/Strings"

[[languages]]
backend = "zh_TW"
output = "zh-Hant"

[[languages]]
backend = "pt_BR"
output = "pt-BR"

[[resources]]
name = "app-strings"
kind = "strings"
file = "Localizable.strings"
encoding = "utf16le"
bom = true

[[resources]]
name = "app-store"
kind = "store_assets"
"#;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_project_file() {
    let temp = temp_dir();
    let path = write(temp.path(), "txsync.toml", PROJECT_TOML);

    let config = Config::from_file(&path).unwrap();

    assert_eq!(
        config.transifex.url,
        "https://www.transifex.com/api/2/project/Demo"
    );
    assert_eq!(config.transifex.threshold, 50);
    assert_eq!(config.transifex.jobs, 4);
    assert_eq!(config.paths.strings, Path::new("Resources/Strings"));
    assert_eq!(config.paths.store_assets, Path::new("StoreAssets"));

    let languages: Vec<(&str, &str)> = config
        .languages
        .iter()
        .map(|l| (l.backend.as_str(), l.output.as_str()))
        .collect();
    assert_eq!(languages, [("zh_TW", "zh-Hant"), ("pt_BR", "pt-BR")]);

    let strings = config.resource("app-strings").unwrap();
    assert_eq!(strings.kind, ResourceKind::Strings);
    assert_eq!(strings.encoding, OutputEncoding::Utf16Le);
    assert!(strings.bom);
    assert_eq!(
        config.paths.output_path(strings, "zh-Hant"),
        Path::new("/work/app/Resources/Strings/zh-Hant.lproj/Localizable.strings")
    );

    let store = config.resource("app-store").unwrap();
    assert_eq!(
        config.paths.master_path(store),
        Path::new("/work/app/StoreAssets/master.yaml")
    );
}

#[test]
fn test_later_file_overrides_earlier() {
    let temp = temp_dir();
    let base = write(temp.path(), "base.toml", PROJECT_TOML);
    let local = write(
        temp.path(),
        "local.toml",
        "[transifex]\nthreshold = 10\n\n[paths]\nroot = \"/elsewhere\"\n",
    );

    let loader = Config::builder().add_toml_file(&base).add_toml_file(&local);
    let sources: Vec<ConfigSource> = loader.loaded_files().iter().map(|(s, _)| *s).collect();
    assert_eq!(sources, [ConfigSource::Ini, ConfigSource::Ini]);
    let config = loader.build().unwrap();

    assert_eq!(config.transifex.threshold, 10);
    assert_eq!(config.transifex.jobs, 4);
    assert_eq!(config.paths.root, Path::new("/elsewhere"));
    assert_eq!(config.resources.len(), 2);
}

#[test]
fn test_overrides_beat_files() {
    let temp = temp_dir();
    let path = write(temp.path(), "txsync.toml", PROJECT_TOML);

    let config = Config::builder()
        .add_toml_file(&path)
        .with_overrides(&["transifex.jobs=2", "paths/root=/override"])
        .and_then(txsync::config::loader::ConfigLoader::build)
        .unwrap();

    assert_eq!(config.transifex.jobs, 2);
    assert_eq!(config.paths.root, Path::new("/override"));
}

#[test]
fn test_optional_missing_file_uses_defaults() {
    let temp = temp_dir();

    let config = Config::builder()
        .add_toml_file_optional(temp.path().join("txsync.toml"))
        .build()
        .unwrap();

    assert_eq!(config.transifex.threshold, 35);
    assert_eq!(config.languages.len(), 32);
    assert_eq!(config.resources.len(), 2);
}

#[test]
fn test_required_missing_file_fails() {
    let temp = temp_dir();
    assert!(Config::from_file(temp.path().join("absent.toml")).is_err());
}

#[test]
fn test_strings_resource_without_file_is_rejected() {
    let err = Config::parse("[[resources]]\nname = \"broken\"\nkind = \"strings\"\n").unwrap_err();

    let Some(ConfigError::MissingKey { key, .. }) = err.downcast_ref::<ConfigError>() else {
        panic!("expected MissingKey");
    };
    assert_eq!(key, "file");
}

#[test]
fn test_unknown_section_is_rejected() {
    assert!(Config::parse("[git]\nremote = \"origin\"\n").is_err());
}
