// txsync: Transifex translation sync tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for txsync.
//!
//! # Config Structure
//!
//! ```text
//! Config: TransifexConfig, PathsConfig, [LanguageMapping], [ResourceConfig]
//! LanguageMapping: backend code → output code
//! ResourceConfig:  name, kind (strings | store_assets), file, bom, encoding
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::utility::encoding::OutputEncoding;

/// Transifex API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransifexConfig {
    /// Project API root; resource paths are appended to it.
    pub url: String,
    /// Completion percentage above which an unmapped language is reported.
    pub threshold: u8,
    /// Languages processed concurrently per resource.
    pub jobs: usize,
}

impl Default for TransifexConfig {
    fn default() -> Self {
        Self {
            url: "https://www.transifex.com/api/2/project/Psiphon3".to_string(),
            threshold: 35,
            jobs: 1,
        }
    }
}

/// One entry of the backend → output language table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageMapping {
    /// Code used by the backend (e.g. `zh_TW`).
    pub backend: String,
    /// Code used for output paths and document keys (e.g. `zh-Hant`).
    pub output: String,
}

impl LanguageMapping {
    #[must_use]
    pub fn new(backend: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            backend: backend.into(),
            output: output.into(),
        }
    }
}

/// Languages pulled by default.
pub const DEFAULT_LANGUAGES: &[(&str, &str)] = &[
    ("am", "am"),             // Amharic
    ("ar", "ar"),             // Arabic
    ("az@latin", "az"),       // Azerbaijani
    ("be", "be"),             // Belarusian
    ("bo", "bo"),             // Tibetan
    ("de", "de"),             // German
    ("el_GR", "el"),          // Greek
    ("es", "es"),             // Spanish
    ("fa", "fa"),             // Farsi/Persian
    ("fi_FI", "fi"),          // Finnish
    ("fr", "fr"),             // French
    ("hr", "hr"),             // Croatian
    ("id", "id"),             // Indonesian
    ("kk", "kk"),             // Kazakh
    ("km", "km"),             // Khmer
    ("ko", "ko"),             // Korean
    ("ky", "ky"),             // Kyrgyz
    ("my", "my"),             // Burmese
    ("nb_NO", "nb"),          // Norwegian
    ("nl", "nl"),             // Dutch
    ("pt_BR", "pt-BR"),       // Portuguese (Brazil)
    ("pt_PT", "pt-PT"),       // Portuguese (Portugal)
    ("ru", "ru"),             // Russian
    ("tg", "tg"),             // Tajik
    ("th", "th"),             // Thai
    ("tk", "tk"),             // Turkmen
    ("tr", "tr"),             // Turkish
    ("uk", "uk"),             // Ukrainian
    ("uz", "uz"),             // Uzbek
    ("vi", "vi"),             // Vietnamese
    ("zh", "zh-Hans"),        // Chinese (simplified)
    ("zh_TW", "zh-Hant"),     // Chinese (traditional)
];

/// The built-in language table.
#[must_use]
pub fn default_languages() -> Vec<LanguageMapping> {
    DEFAULT_LANGUAGES
        .iter()
        .map(|(backend, output)| LanguageMapping::new(*backend, *output))
        .collect()
}

/// Resource format, which selects the merge strategy and output layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// Apple `.strings` table under `<strings>/<lang>.lproj/<file>`.
    Strings,
    /// Store asset YAML under `<store_assets>/<lang>.yaml`.
    StoreAssets,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strings => write!(f, "strings"),
            Self::StoreAssets => write!(f, "store_assets"),
        }
    }
}

impl std::str::FromStr for ResourceKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "strings" => Ok(Self::Strings),
            "store_assets" => Ok(Self::StoreAssets),
            _ => Err(ConfigError::InvalidValue {
                section: "resources".to_string(),
                key: "kind".to_string(),
                message: format!("expected 'strings' or 'store_assets', got '{s}'"),
            }),
        }
    }
}

/// A translatable resource tracked by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceConfig {
    /// Backend resource slug.
    pub name: String,
    /// Resource format.
    pub kind: ResourceKind,
    /// File name inside each `.lproj` directory (strings resources only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Write a byte-order mark.
    #[serde(default)]
    pub bom: bool,
    /// Output encoding.
    #[serde(default)]
    pub encoding: OutputEncoding,
}

/// Resources pulled by default.
#[must_use]
pub fn default_resources() -> Vec<ResourceConfig> {
    vec![
        ResourceConfig {
            name: "ios-vpn-app-localizablestrings".to_string(),
            kind: ResourceKind::Strings,
            file: Some("Localizable.strings".to_string()),
            bom: false,
            encoding: OutputEncoding::Utf8,
        },
        ResourceConfig {
            name: "ios-vpn-app-store-assets".to_string(),
            kind: ResourceKind::StoreAssets,
            file: None,
            bom: false,
            encoding: OutputEncoding::Utf8,
        },
    ]
}
