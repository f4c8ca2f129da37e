// txsync: Transifex translation sync tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path configuration.
//!
//! ```text
//! root/
//!   Shared/Strings/            (strings)
//!     en.lproj/<file>          master
//!     <lang>.lproj/<file>      translations
//!   StoreAssets/               (store_assets)
//!     master.yaml              master
//!     <lang>.yaml              translations
//! ```
//!
//! `strings` and `store_assets` are resolved against `root` when relative.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::types::{ResourceConfig, ResourceKind};

/// Output layout configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Repository root.
    pub root: PathBuf,
    /// String table directory.
    pub strings: PathBuf,
    /// Store asset directory.
    pub store_assets: PathBuf,
    /// Explicit credentials file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<PathBuf>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            strings: PathBuf::from("Shared/Strings"),
            store_assets: PathBuf::from("StoreAssets"),
            credentials: None,
        }
    }
}

impl PathsConfig {
    /// Directory holding files of the given kind.
    #[must_use]
    pub fn kind_dir(&self, kind: ResourceKind) -> PathBuf {
        let dir = match kind {
            ResourceKind::Strings => &self.strings,
            ResourceKind::StoreAssets => &self.store_assets,
        };
        self.root.join(dir)
    }

    /// Where the translation of `resource` for output language `lang` lives.
    #[must_use]
    pub fn output_path(&self, resource: &ResourceConfig, lang: &str) -> PathBuf {
        let dir = self.kind_dir(resource.kind);
        match resource.kind {
            ResourceKind::Strings => dir
                .join(format!("{lang}.lproj"))
                .join(resource.file.as_deref().unwrap_or_default()),
            ResourceKind::StoreAssets => dir.join(format!("{lang}.yaml")),
        }
    }

    /// Where the English master of `resource` lives.
    #[must_use]
    pub fn master_path(&self, resource: &ResourceConfig) -> PathBuf {
        match resource.kind {
            ResourceKind::Strings => self.output_path(resource, "en"),
            ResourceKind::StoreAssets => self.kind_dir(resource.kind).join("master.yaml"),
        }
    }
}
