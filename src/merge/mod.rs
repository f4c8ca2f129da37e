// txsync: Transifex translation sync tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Merge engine.
//!
//! ```text
//! MergeStrategy (chosen per resource by the pipeline)
//!   AppleStrings { master }   merge_applestrings_translations
//!                             --> flag_untranslated_applestrings
//!   StoreAssets  { master }   rewrite_language_key
//!                             --> merge_storeassets_translations
//!   Passthrough               content as fetched
//! ```
//!
//! Every strategy is best effort: problems with the master, the existing
//! file or the fresh content are logged and the fresh content wins.

pub mod strings;
pub mod yaml;

use std::path::Path;

use tracing::warn;

use crate::config::types::ResourceKind;
use crate::formats::strings::StringsFile;
use crate::formats::yaml::{StoreAssetsDocument, rewrite_language_key};

pub use strings::{
    flag_untranslated, flag_untranslated_applestrings, merge_applestrings_translations,
    merge_entries,
};
pub use yaml::{merge_documents, merge_storeassets_translations};

/// How fresh content of a resource is combined with what is on disk.
#[derive(Debug, Clone, PartialEq)]
pub enum MergeStrategy {
    /// Apple `.strings` merge followed by untranslated flagging.
    AppleStrings { master: StringsFile },
    /// Store asset YAML: language key rewrite followed by field merge.
    StoreAssets { master: StoreAssetsDocument },
    /// Write fetched content unchanged.
    Passthrough,
}

impl MergeStrategy {
    /// Builds the strategy for a resource kind, loading its English master.
    ///
    /// A master that cannot be loaded degrades the resource to
    /// [`MergeStrategy::Passthrough`] with a warning.
    #[must_use]
    pub fn load(kind: ResourceKind, master_path: &Path) -> Self {
        match kind {
            ResourceKind::Strings => match StringsFile::read(master_path) {
                Ok(master) => Self::AppleStrings { master },
                Err(e) => {
                    warn!(
                        path = %master_path.display(),
                        error = %e,
                        "failed to load English master, translations will not be merged"
                    );
                    Self::Passthrough
                }
            },
            ResourceKind::StoreAssets => match StoreAssetsDocument::read(master_path) {
                Ok(master) if master.fields("en").is_some() => Self::StoreAssets { master },
                Ok(_) => {
                    warn!(
                        path = %master_path.display(),
                        "English master has no 'en' mapping, translations will not be merged"
                    );
                    Self::Passthrough
                }
                Err(e) => {
                    warn!(
                        path = %master_path.display(),
                        error = %e,
                        "failed to load English master, translations will not be merged"
                    );
                    Self::Passthrough
                }
            },
        }
    }

    /// Short name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AppleStrings { .. } => "apple-strings",
            Self::StoreAssets { .. } => "store-assets",
            Self::Passthrough => "passthrough",
        }
    }

    /// Applies the strategy to freshly fetched content for `lang`.
    ///
    /// `existing_path` is the previously committed translation, which is
    /// also where the result will be written.
    #[must_use]
    pub fn apply(&self, lang: &str, fresh: &str, existing_path: &Path) -> String {
        match self {
            Self::AppleStrings { master } => {
                let merged = merge_applestrings_translations(fresh, master, existing_path);
                flag_untranslated_applestrings(&merged, master)
            }
            Self::StoreAssets { master } => {
                let renamed = rewrite_language_key(lang, fresh).unwrap_or_else(|e| {
                    warn!(lang, error = %e, "cannot rewrite language key");
                    fresh.to_string()
                });
                merge_storeassets_translations(lang, &renamed, master, existing_path)
            }
            Self::Passthrough => fresh.to_string(),
        }
    }
}
