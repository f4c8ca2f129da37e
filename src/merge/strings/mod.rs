// txsync: Transifex translation sync tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! String table merge and untranslated flagging.
//!
//! ```text
//! fresh (backend) ---+
//! english (master) --+--> merge_entries --> flag_untranslated --> text
//! existing (disk) ---+
//!
//! per key:
//!   fresh == english && existing unflagged && existing != english
//!     --> existing
//!   otherwise
//!     --> fresh
//! ```
//!
//! The backend fills untranslated strings with the English source. Flagging
//! those entries keeps an English value from a previous pull from being
//! mistaken for a real translation after the English text changes.

use std::path::Path;

use tracing::{debug, warn};

use crate::formats::strings::StringsFile;

/// Prefers earlier real translations over fresh English fallbacks.
///
/// Entries keep the order of `fresh`. Keys missing from `english` are logged
/// and kept as fetched.
#[must_use]
pub fn merge_entries(
    fresh: &StringsFile,
    english: &StringsFile,
    existing: &StringsFile,
) -> StringsFile {
    let english = english.index();
    let existing = existing.index();

    let entries = fresh
        .entries
        .iter()
        .map(|entry| {
            let english_value = english.get(entry.key.as_str()).map(|e| e.value.as_str());
            if english_value.is_none() {
                warn!(key = %entry.key, "key missing from English master");
            }

            let existing_value = existing
                .get(entry.key.as_str())
                .filter(|e| !e.untranslated)
                .map(|e| e.value.as_str());

            let mut merged = entry.clone();
            if let (Some(english_value), Some(existing_value)) = (english_value, existing_value)
                && entry.value == english_value
                && existing_value != english_value
            {
                debug!(key = %entry.key, "keeping previous translation over English fallback");
                merged.value = existing_value.to_string();
            }
            merged
        })
        .collect();

    StringsFile::new(entries)
}

/// Sets the untranslated flag on every entry whose value equals the English.
///
/// Returns the number of flagged entries.
pub fn flag_untranslated(file: &mut StringsFile, english: &StringsFile) -> usize {
    let english = english.index();
    let mut flagged = 0;
    for entry in &mut file.entries {
        entry.untranslated = english
            .get(entry.key.as_str())
            .is_some_and(|e| e.value == entry.value);
        if entry.untranslated {
            flagged += 1;
        }
    }
    flagged
}

/// Merges freshly pulled string table text with the translation at
/// `existing_path`.
///
/// Best effort: if the fresh content or the existing file cannot be parsed,
/// a warning is logged and `fresh` is returned verbatim.
#[must_use]
pub fn merge_applestrings_translations(
    fresh: &str,
    english: &StringsFile,
    existing_path: &Path,
) -> String {
    let fresh_file = match StringsFile::parse(fresh) {
        Ok(file) => file,
        Err(e) => {
            warn!(error = %e, "failed to parse fresh translation, keeping it unmerged");
            return fresh.to_string();
        }
    };

    let existing = match StringsFile::read(existing_path) {
        Ok(file) => file,
        Err(e) => {
            warn!(
                path = %existing_path.display(),
                error = %e,
                "failed to open existing translation"
            );
            return fresh.to_string();
        }
    };

    merge_entries(&fresh_file, english, &existing).to_string()
}

/// Flags entries of string table text that still carry the English value.
///
/// Content that cannot be parsed is logged and returned verbatim.
#[must_use]
pub fn flag_untranslated_applestrings(content: &str, english: &StringsFile) -> String {
    let mut file = match StringsFile::parse(content) {
        Ok(file) => file,
        Err(e) => {
            warn!(error = %e, "failed to parse translation for flagging");
            return content.to_string();
        }
    };

    let flagged = flag_untranslated(&mut file, english);
    debug!(flagged, total = file.len(), "flagged untranslated entries");
    file.to_string()
}
