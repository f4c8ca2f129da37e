// txsync: Transifex translation sync tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{format_stats, selected_resources};
use crate::cli::pull::PullArgs;
use crate::config::Config;
use crate::transifex::LanguageStats;

#[test]
fn test_format_stats() {
    let stats = LanguageStats {
        completed: "42%".to_string(),
        translated_entities: 21,
        untranslated_entities: 29,
    };
    insta::assert_snapshot!(format_stats("zh_TW", &stats), @"zh_TW        42% (21 of 50)");
}

#[test]
fn test_selected_resources() {
    let config = Config::default();

    let all = selected_resources(&PullArgs::default(), &config).unwrap();
    assert_eq!(all.len(), 2);

    let args = PullArgs {
        resources: vec!["ios-vpn-app-store-assets".to_string()],
        jobs: None,
    };
    let one = selected_resources(&args, &config).unwrap();
    assert_eq!(one[0].name, "ios-vpn-app-store-assets");

    let args = PullArgs {
        resources: vec!["missing".to_string()],
        jobs: None,
    };
    assert!(selected_resources(&args, &config).is_err());
}
