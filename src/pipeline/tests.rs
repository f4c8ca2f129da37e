// txsync: Transifex translation sync tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ResourcePipeline, SkippedLanguage};
use crate::config::Config;
use crate::config::credentials::Credentials;
use crate::config::types::{LanguageMapping, ResourceConfig, ResourceKind};
use crate::error::{PipelineError, TxError};
use crate::transifex::TransifexClient;
use crate::utility::encoding::OutputEncoding;
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const RESOURCE: &str = "app-strings";

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn strings_resource() -> ResourceConfig {
    ResourceConfig {
        name: RESOURCE.to_string(),
        kind: ResourceKind::Strings,
        file: Some("Localizable.strings".to_string()),
        bom: false,
        encoding: OutputEncoding::Utf8,
    }
}

fn config(server: &MockServer, root: &Path) -> Config {
    let mut config = Config::default();
    config.transifex.url = format!("{}/api", server.uri());
    config.paths.root = root.to_path_buf();
    config.languages = vec![
        LanguageMapping::new("fr", "fr"),
        LanguageMapping::new("zh_TW", "zh-Hant"),
    ];
    config.resources = vec![strings_resource()];
    config
}

fn pipeline(server: &MockServer, root: &Path) -> ResourcePipeline {
    let config = config(server, root);
    let client = TransifexClient::new(&config.transifex.url, Credentials::new("u", "p"));
    ResourcePipeline::new(client, &config)
}

async fn mount_json(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_translation(server: &MockServer, lang: &str, content: &str) {
    mount_json(
        server,
        &format!("/api/resource/{RESOURCE}/translation/{lang}/"),
        serde_json::json!({ "content": content }),
    )
    .await;
}

async fn mount_stats(server: &MockServer, body: serde_json::Value) {
    mount_json(server, &format!("/api/resource/{RESOURCE}/stats/"), body).await;
}

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

fn read(root: &Path, relative: &str) -> String {
    std::fs::read_to_string(root.join(relative)).unwrap()
}

#[tokio::test]
async fn test_process_merges_flags_and_writes() {
    let server = MockServer::start().await;
    let temp = temp_dir();
    let root = temp.path();
    write(
        root,
        "Shared/Strings/en.lproj/Localizable.strings",
        "/*a*/\n\"CANCEL\" = \"Stop\";\n/*b*/\n\"OK\" = \"OK\";\n",
    );
    write(
        root,
        "Shared/Strings/fr.lproj/Localizable.strings",
        "/*a*/\n\"CANCEL\" = \"Annuler\";\n",
    );
    mount_stats(&server, serde_json::json!({})).await;
    mount_translation(
        &server,
        "fr",
        "/*a*/\r\n\"CANCEL\" = \"Stop\";\r\n/*b*/\r\n\"OK\" = \"D'accord\";\r\n",
    )
    .await;
    mount_translation(
        &server,
        "zh_TW",
        "/*a*/\n\"CANCEL\" = \"取消\";\n/*b*/\n\"OK\" = \"OK\";\n",
    )
    .await;

    let summary = pipeline(&server, root)
        .process(&strings_resource())
        .await
        .unwrap();

    assert_eq!(summary.strategy, "apple-strings");
    let langs: Vec<&str> = summary.written.iter().map(|(l, _)| l.as_str()).collect();
    assert_eq!(langs, ["fr", "zh-Hant"]);
    assert_eq!(
        read(root, "Shared/Strings/fr.lproj/Localizable.strings"),
        "/*a*/\n\"CANCEL\" = \"Annuler\";\n\n/*b*/\n\"OK\" = \"D'accord\";\n\n"
    );
    assert_eq!(
        read(root, "Shared/Strings/zh-Hant.lproj/Localizable.strings"),
        "/*a*/\n\"CANCEL\" = \"取消\";\n\n/*[UNTRANSLATED]b*/\n\"OK\" = \"OK\";\n\n"
    );
}

#[tokio::test]
async fn test_process_without_master_writes_fetched_content() {
    let server = MockServer::start().await;
    let temp = temp_dir();
    mount_stats(&server, serde_json::json!({})).await;
    mount_translation(&server, "fr", "\"A\" = \"B\";\r\n").await;
    mount_translation(&server, "zh_TW", "\"A\" = \"C\";").await;

    let summary = pipeline(&server, temp.path())
        .process(&strings_resource())
        .await
        .unwrap();

    assert_eq!(summary.strategy, "passthrough");
    assert_eq!(
        read(temp.path(), "Shared/Strings/fr.lproj/Localizable.strings"),
        "\"A\" = \"B\";\n"
    );
}

#[tokio::test]
async fn test_report_skipped_languages() {
    let server = MockServer::start().await;
    let temp = temp_dir();
    mount_stats(
        &server,
        serde_json::json!({
            "en": {"completed": "100%", "translated_entities": 10, "untranslated_entities": 0},
            "fr": {"completed": "90%", "translated_entities": 9, "untranslated_entities": 1},
            "he": {"completed": "80%", "translated_entities": 8, "untranslated_entities": 2},
            "ja": {"completed": "35%", "translated_entities": 7, "untranslated_entities": 13},
            "ug": {"completed": "36%", "translated_entities": 9, "untranslated_entities": 16}
        }),
    )
    .await;

    let skipped = pipeline(&server, temp.path())
        .report_skipped(RESOURCE)
        .await
        .unwrap();

    assert_eq!(
        skipped,
        vec![
            SkippedLanguage {
                lang: "he".to_string(),
                completed: "80%".to_string(),
                translated: 8,
                total: 10,
            },
            SkippedLanguage {
                lang: "ug".to_string(),
                completed: "36%".to_string(),
                translated: 9,
                total: 25,
            },
        ]
    );
}

#[tokio::test]
async fn test_dry_run_writes_nothing() {
    let server = MockServer::start().await;
    let temp = temp_dir();
    mount_stats(&server, serde_json::json!({})).await;
    mount_translation(&server, "fr", "\"A\" = \"B\";").await;
    mount_translation(&server, "zh_TW", "\"A\" = \"C\";").await;

    let summary = pipeline(&server, temp.path())
        .with_dry_run(true)
        .process(&strings_resource())
        .await
        .unwrap();

    assert_eq!(summary.written.len(), 2);
    assert!(!temp.path().join("Shared").exists());
}

#[tokio::test]
async fn test_cancelled_pipeline_is_interrupted() {
    let server = MockServer::start().await;
    let temp = temp_dir();
    mount_stats(&server, serde_json::json!({})).await;

    let pipeline = pipeline(&server, temp.path());
    pipeline.cancel_token().cancel();
    let err = pipeline.process(&strings_resource()).await.unwrap_err();

    assert!(matches!(
        err,
        TxError::Pipeline(ref e) if matches!(**e, PipelineError::Interrupted(ref r) if r == RESOURCE)
    ));
    assert!(!temp.path().join("Shared").exists());
}

#[tokio::test]
async fn test_transport_error_aborts_resource() {
    let server = MockServer::start().await;
    let temp = temp_dir();
    mount_stats(&server, serde_json::json!({})).await;
    mount_translation(&server, "fr", "\"A\" = \"B\";").await;
    Mock::given(method("GET"))
        .and(path(format!("/api/resource/{RESOURCE}/translation/zh_TW/")))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = pipeline(&server, temp.path())
        .process(&strings_resource())
        .await
        .unwrap_err();

    assert!(matches!(err, TxError::Network(_)));
}

#[tokio::test]
async fn test_concurrent_jobs_write_every_language() {
    let server = MockServer::start().await;
    let temp = temp_dir();
    mount_stats(&server, serde_json::json!({})).await;
    mount_translation(&server, "fr", "\"A\" = \"B\";").await;
    mount_translation(&server, "zh_TW", "\"A\" = \"C\";").await;

    let pipeline = pipeline(&server, temp.path()).with_jobs(4);
    assert_eq!(pipeline.jobs(), 4);
    let summary = pipeline.process(&strings_resource()).await.unwrap();

    assert_eq!(summary.written.len(), 2);
    assert!(
        temp.path()
            .join("Shared/Strings/zh-Hant.lproj/Localizable.strings")
            .is_file()
    );
}

#[tokio::test]
async fn test_gather() {
    let server = MockServer::start().await;
    let temp = temp_dir();
    mount_translation(&server, "fr", "\"A\" = \"B\";\r\n").await;
    mount_translation(&server, "zh_TW", "\"A\" = \"C\";").await;
    mount_json(
        &server,
        &format!("/api/resource/{RESOURCE}/stats/fr/"),
        serde_json::json!({"completed": "50%", "translated_entities": 1, "untranslated_entities": 1}),
    )
    .await;
    mount_json(
        &server,
        &format!("/api/resource/{RESOURCE}/stats/zh_TW/"),
        serde_json::json!({"completed": "0%", "translated_entities": 0, "untranslated_entities": 2}),
    )
    .await;

    let pipeline = pipeline(&server, temp.path());

    let all = pipeline.gather(RESOURCE, false).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all["fr"], "\"A\" = \"B\";\n");
    assert_eq!(all["zh-Hant"], "\"A\" = \"C\";");

    let translated = pipeline.gather(RESOURCE, true).await.unwrap();
    assert_eq!(translated.keys().collect::<Vec<_>>(), ["fr"]);
}
