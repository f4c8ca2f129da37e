// txsync: Transifex translation sync tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, FsError, NetworkError, ParseError, TxError, TxResult};

#[test]
fn test_config_error_display() {
    let err = ConfigError::CredentialsNotFound {
        searched: "transifex_conf.json".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"unable to find credentials file (searched: transifex_conf.json)"
    );
}

#[test]
fn test_network_error_display_and_status() {
    let err = NetworkError::HttpError {
        status: 404,
        url: "https://example.com/resource/x/stats/".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"request failed with code 404: https://example.com/resource/x/stats/"
    );
    assert_eq!(err.status(), Some(404));
    assert_eq!(NetworkError::InvalidUrl("x".into()).status(), None);
}

#[test]
fn test_parse_error_display() {
    let err = ParseError::Strings {
        line: 3,
        fragment: "oops".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @r#"malformed string table at line 3: "oops""#);
}

#[test]
fn test_fs_error_from_io_classifies_kind() {
    let path = std::path::Path::new("/nowhere/file");
    let err = FsError::from_io(path, std::io::Error::from(std::io::ErrorKind::NotFound));
    assert!(matches!(err, FsError::NotFound(p) if p == "/nowhere/file"));

    let err = FsError::from_io(
        path,
        std::io::Error::from(std::io::ErrorKind::PermissionDenied),
    );
    assert!(matches!(err, FsError::PermissionDenied(_)));
}

#[test]
fn test_boxed_conversion() {
    let err: TxError = ParseError::MissingLanguage { lang: "fr".into() }.into();
    assert!(matches!(err, TxError::Parse(_)));
}

#[test]
fn test_tx_error_size() {
    let size = std::mem::size_of::<TxError>();
    assert!(size <= 24, "TxError is {size} bytes, expected <= 24");
}

#[test]
fn test_tx_result_size() {
    let size = std::mem::size_of::<TxResult<()>>();
    assert!(size <= 24, "TxResult<()> is {size} bytes, expected <= 24");
}
