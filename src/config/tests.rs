// txsync: Transifex translation sync tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::credentials::{Credentials, DEFAULT_CREDENTIALS_FILENAME, locate_in};
use super::loader::parse_override;
use super::types::{LanguageMapping, ResourceKind};
use super::{Config, ConfigLoader, PathsConfig};
use crate::error::ConfigError;
use crate::utility::encoding::OutputEncoding;
use std::path::{Path, PathBuf};

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(
        config.transifex.url,
        "https://www.transifex.com/api/2/project/Psiphon3"
    );
    assert_eq!(config.transifex.threshold, 35);
    assert_eq!(config.transifex.jobs, 1);
    assert_eq!(config.languages.len(), 32);
    assert_eq!(config.resources.len(), 2);
    assert!(
        config
            .languages
            .contains(&LanguageMapping::new("zh_TW", "zh-Hant"))
    );
    assert!(
        config
            .languages
            .contains(&LanguageMapping::new("az@latin", "az"))
    );
}

#[test]
fn test_parse_empty_gives_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.languages.len(), 32);
    assert_eq!(config.paths, PathsConfig::default());
}

#[test]
fn test_parse_replaces_tables() {
    let config = Config::parse(
        r#"
[transifex]
url = "http://localhost:8080/api/2/project/Demo/"
jobs = 4

[paths]
root = "/repo"

[[languages]]
backend = "fr"
output = "fr"

[[languages]]
backend = "pt_BR"
output = "pt-BR"

[[resources]]
name = "app-strings"
kind = "strings"
file = "Main.strings"
bom = true
encoding = "utf-16le"
"#,
    )
    .unwrap();

    assert_eq!(config.transifex.url, "http://localhost:8080/api/2/project/Demo");
    assert_eq!(config.transifex.jobs, 4);
    assert_eq!(config.transifex.threshold, 35);
    assert_eq!(config.paths.root, PathBuf::from("/repo"));
    assert_eq!(config.paths.strings, PathBuf::from("Shared/Strings"));
    assert_eq!(
        config.languages,
        vec![
            LanguageMapping::new("fr", "fr"),
            LanguageMapping::new("pt_BR", "pt-BR"),
        ]
    );
    let resource = config.resource("app-strings").unwrap();
    assert_eq!(resource.kind, ResourceKind::Strings);
    assert!(resource.bom);
    assert_eq!(resource.encoding, OutputEncoding::Utf16Le);
}

#[test]
fn test_unknown_field_rejected() {
    assert!(Config::parse("[transifex]\nteam = \"x\"\n").is_err());
}

#[test]
fn test_validation_failures() {
    let cases = [
        "[transifex]\nthreshold = 101\n",
        "[transifex]\njobs = 0\n",
        "[transifex]\nurl = \"ftp://example.com\"\n",
        "[[languages]]\nbackend = \"fr\"\noutput = \"fr\"\n[[languages]]\nbackend = \"fr\"\noutput = \"fr-FR\"\n",
        "[[languages]]\nbackend = \"fr\"\noutput = \"fr\"\n[[languages]]\nbackend = \"fr_CA\"\noutput = \"fr\"\n",
        "[[resources]]\nname = \"a\"\nkind = \"store_assets\"\n[[resources]]\nname = \"a\"\nkind = \"store_assets\"\n",
    ];
    for case in cases {
        assert!(Config::parse(case).is_err(), "accepted: {case}");
    }
}

#[test]
fn test_strings_resource_requires_file() {
    let err = Config::parse("[[resources]]\nname = \"a\"\nkind = \"strings\"\n").unwrap_err();
    let config_err = err.downcast_ref::<ConfigError>().unwrap();
    assert!(matches!(config_err, ConfigError::MissingKey { key, .. } if key == "file"));
}

#[test]
fn test_resource_kind_parse_and_display() {
    assert_eq!("strings".parse::<ResourceKind>().unwrap(), ResourceKind::Strings);
    assert_eq!(
        "store-assets".parse::<ResourceKind>().unwrap(),
        ResourceKind::StoreAssets
    );
    assert!("plain".parse::<ResourceKind>().is_err());
    assert_eq!(ResourceKind::StoreAssets.to_string(), "store_assets");
}

#[test]
fn test_overrides() {
    let config = ConfigLoader::new()
        .add_toml_str("[transifex]\njobs = 2\n")
        .with_overrides(&["transifex.jobs=6", "paths/root=/elsewhere"])
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.transifex.jobs, 6);
    assert_eq!(config.paths.root, PathBuf::from("/elsewhere"));
}

#[test]
fn test_parse_override() {
    assert_eq!(
        parse_override("transifex/threshold = 50").unwrap(),
        ("transifex.threshold".to_string(), "50".to_string())
    );
    assert!(parse_override("transifex.threshold").is_err());
    assert!(parse_override("threshold=50").is_err());
    assert!(parse_override(".threshold=50").is_err());
}

#[test]
fn test_loaded_files() {
    let loader = ConfigLoader::new()
        .add_toml_str("")
        .add_toml_file_optional("/definitely/not/here/txsync.toml");

    insta::assert_snapshot!(loader.format_loaded_files().join("\n"), @"1. [inline] <string>");
}

#[test]
fn test_output_paths() {
    let config = Config::parse("[paths]\nroot = \"/repo\"\n").unwrap();
    let strings = config.resource("ios-vpn-app-localizablestrings").unwrap();
    let assets = config.resource("ios-vpn-app-store-assets").unwrap();

    assert_eq!(
        config.paths.output_path(strings, "zh-Hant"),
        Path::new("/repo/Shared/Strings/zh-Hant.lproj/Localizable.strings")
    );
    assert_eq!(
        config.paths.master_path(strings),
        Path::new("/repo/Shared/Strings/en.lproj/Localizable.strings")
    );
    assert_eq!(
        config.paths.output_path(assets, "pt-BR"),
        Path::new("/repo/StoreAssets/pt-BR.yaml")
    );
    assert_eq!(
        config.paths.master_path(assets),
        Path::new("/repo/StoreAssets/master.yaml")
    );
}

#[test]
fn test_unknown_resource() {
    let config = Config::default();
    let err = config.resource("nope").unwrap_err();
    assert_eq!(err.to_string(), "resource 'nope' is not configured");
}

#[test]
fn test_format_options() {
    let mut config = Config::default();
    config.languages = vec![LanguageMapping::new("el_GR", "el")];
    config.resources.truncate(1);

    insta::assert_snapshot!(config.format_options().join("\n"), @r"
    languages.el_GR                                   = el
    paths.root                                        = .
    paths.store_assets                                = StoreAssets
    paths.strings                                     = Shared/Strings
    resources.ios-vpn-app-localizablestrings.bom      = false
    resources.ios-vpn-app-localizablestrings.encoding = utf-8
    resources.ios-vpn-app-localizablestrings.file     = Localizable.strings
    resources.ios-vpn-app-localizablestrings.kind     = strings
    transifex.jobs                                    = 1
    transifex.threshold                               = 35
    transifex.url                                     = https://www.transifex.com/api/2/project/Psiphon3
    ");
}

#[test]
fn test_credentials_parse() {
    let path = Path::new("transifex_conf.json");
    let creds =
        Credentials::parse(path, r#"{"username": "alice", "password": "s3cret"}"#).unwrap();

    assert_eq!(creds, Credentials::new("alice", "s3cret"));
    let debug = format!("{creds:?}");
    assert!(debug.contains("alice"));
    assert!(!debug.contains("s3cret"));
}

#[test]
fn test_credentials_invalid() {
    let path = Path::new("transifex_conf.json");
    for content in [
        "",
        "{}",
        r#"{"username": "", "password": "x"}"#,
        r#"{"username": "a", "password": ""}"#,
        "not json",
    ] {
        let err = Credentials::parse(path, content).unwrap_err();
        assert!(
            matches!(err, ConfigError::CredentialsInvalid { .. }),
            "{content}"
        );
    }
}

#[test]
fn test_credentials_search_order() {
    let cwd = tempfile::tempdir().unwrap();
    let exe = tempfile::tempdir().unwrap();
    let explicit = cwd.path().join("custom.json");
    std::fs::write(exe.path().join(DEFAULT_CREDENTIALS_FILENAME), "{}").unwrap();

    // missing explicit path and empty cwd fall through to exe dir
    assert_eq!(
        locate_in(Some(&explicit), Some(cwd.path()), Some(exe.path())).unwrap(),
        exe.path().join(DEFAULT_CREDENTIALS_FILENAME)
    );

    std::fs::write(cwd.path().join(DEFAULT_CREDENTIALS_FILENAME), "{}").unwrap();
    assert_eq!(
        locate_in(Some(&explicit), Some(cwd.path()), Some(exe.path())).unwrap(),
        cwd.path().join(DEFAULT_CREDENTIALS_FILENAME)
    );

    std::fs::write(&explicit, "{}").unwrap();
    assert_eq!(
        locate_in(Some(&explicit), Some(cwd.path()), Some(exe.path())).unwrap(),
        explicit
    );
}

#[test]
fn test_credentials_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = locate_in(None, Some(dir.path()), None).unwrap_err();

    let ConfigError::CredentialsNotFound { searched } = err else {
        panic!("expected CredentialsNotFound");
    };
    assert!(searched.ends_with(DEFAULT_CREDENTIALS_FILENAME));
}

#[test]
fn test_credentials_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_CREDENTIALS_FILENAME);
    std::fs::write(&path, "\u{feff}{\"username\":\"u\",\"password\":\"p\"}").unwrap();

    assert_eq!(Credentials::load(&path).unwrap(), Credentials::new("u", "p"));
    assert!(Credentials::load(&dir.path().join("missing.json")).is_err());
}
