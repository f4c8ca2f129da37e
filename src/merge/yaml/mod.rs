// txsync: Transifex translation sync tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Store asset document merge.
//!
//! The backend leaves untranslated YAML fields empty instead of filling in
//! English. For every field of the master's `en` mapping that the fresh pull
//! lacks, a truthy value from the existing document is carried over.

use std::path::Path;

use serde_yaml::Mapping;
use tracing::{debug, warn};

use crate::error::ParseError;
use crate::formats::yaml::{StoreAssetsDocument, is_truthy};

/// Copies existing values into empty fields of `fresh`.
///
/// Returns the number of fields taken from `existing`.
///
/// # Errors
///
/// Returns `ParseError::MissingLanguage` if either document lacks `lang`.
pub fn merge_documents(
    lang: &str,
    fresh: &mut StoreAssetsDocument,
    master_en: &Mapping,
    existing: &StoreAssetsDocument,
) -> Result<usize, ParseError> {
    let existing_fields = existing.require_fields(lang)?;
    let fresh_fields = fresh
        .fields_mut(lang)
        .ok_or_else(|| ParseError::MissingLanguage {
            lang: lang.to_string(),
        })?;

    let mut carried = 0;
    for key in master_en.keys() {
        if fresh_fields.get(key).is_some_and(is_truthy) {
            continue;
        }
        if let Some(previous) = existing_fields.get(key).filter(|v| is_truthy(v)) {
            debug!(lang, field = ?key, "keeping previous store asset value");
            fresh_fields.insert(key.clone(), previous.clone());
            carried += 1;
        }
    }
    Ok(carried)
}

/// Merges freshly pulled store asset YAML with the document at
/// `existing_path`.
///
/// Best effort: any read, parse or shape problem is logged and `fresh` is
/// returned verbatim.
#[must_use]
pub fn merge_storeassets_translations(
    lang: &str,
    fresh: &str,
    master: &StoreAssetsDocument,
    existing_path: &Path,
) -> String {
    let master_en = match master.require_fields("en") {
        Ok(fields) => fields,
        Err(e) => {
            warn!(error = %e, "master document unusable, keeping fresh translation");
            return fresh.to_string();
        }
    };

    let mut fresh_doc = match StoreAssetsDocument::parse(fresh) {
        Ok(doc) => doc,
        Err(e) => {
            warn!(lang, error = %e, "failed to parse fresh translation, keeping it unmerged");
            return fresh.to_string();
        }
    };

    let existing = match StoreAssetsDocument::read(existing_path) {
        Ok(doc) => doc,
        Err(e) => {
            warn!(
                path = %existing_path.display(),
                error = %e,
                "failed to open existing translation"
            );
            return fresh.to_string();
        }
    };

    if let Err(e) = merge_documents(lang, &mut fresh_doc, master_en, &existing) {
        warn!(lang, path = %existing_path.display(), error = %e, "cannot merge translation");
        return fresh.to_string();
    }

    match fresh_doc.to_yaml() {
        Ok(text) => text,
        Err(e) => {
            warn!(lang, error = %e, "failed to serialize merged translation");
            fresh.to_string()
        }
    }
}
