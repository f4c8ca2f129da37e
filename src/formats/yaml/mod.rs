// txsync: Transifex translation sync tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Store asset YAML documents.
//!
//! ```text
//! fr:
//!   app_name: ...
//!   subtitle: ...
//!   description: |
//!     ...
//!   keywords: [..., ...]
//! ```
//!
//! One top-level language key per document; `master.yaml` uses `en`.
//! Mapping order is preserved through `serde_yaml::Mapping`.

use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::error::{ParseError, TxResult};
use crate::utility::fs::read_text;

/// A parsed store asset document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoreAssetsDocument {
    root: Mapping,
}

impl StoreAssetsDocument {
    /// Parses YAML text. An empty document parses to an empty mapping.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Yaml` for invalid YAML or a non-mapping root.
    pub fn parse(content: &str) -> Result<Self, ParseError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        match serde_yaml::from_str::<Value>(content)? {
            Value::Mapping(root) => Ok(Self { root }),
            Value::Null => Ok(Self::default()),
            other => Err(ParseError::Yaml {
                message: format!("expected a mapping at the top level, got {other:?}"),
            }),
        }
    }

    /// Reads and parses a document from disk.
    ///
    /// # Errors
    ///
    /// Returns an `FsError` if the file cannot be read and a `ParseError` if it
    /// is malformed.
    pub fn read(path: &Path) -> TxResult<Self> {
        let content = read_text(path)?;
        Ok(Self::parse(&content)?)
    }

    /// The language key, if the document has exactly one top-level key.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        if self.root.len() != 1 {
            return None;
        }
        self.root.keys().next().and_then(Value::as_str)
    }

    /// Field mapping for a language.
    #[must_use]
    pub fn fields(&self, lang: &str) -> Option<&Mapping> {
        self.root.get(lang).and_then(Value::as_mapping)
    }

    /// Mutable field mapping for a language.
    ///
    /// An empty body (`fr:` with nothing under it) is null in YAML and is
    /// replaced by an empty mapping. `None` if the key is absent or holds
    /// anything other than a mapping.
    pub fn fields_mut(&mut self, lang: &str) -> Option<&mut Mapping> {
        let body = self.root.get_mut(lang)?;
        if body.is_null() {
            *body = Value::Mapping(Mapping::new());
        }
        body.as_mapping_mut()
    }

    /// Field mapping for a language, or `MissingLanguage`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingLanguage` if the key is absent or not a
    /// mapping.
    pub fn require_fields(&self, lang: &str) -> Result<&Mapping, ParseError> {
        self.fields(lang).ok_or_else(|| ParseError::MissingLanguage {
            lang: lang.to_string(),
        })
    }

    /// Serializes the document back to YAML.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Yaml` if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ParseError> {
        Ok(serde_yaml::to_string(&self.root)?)
    }
}

impl From<Mapping> for StoreAssetsDocument {
    fn from(root: Mapping) -> Self {
        Self { root }
    }
}

/// Whether a field value counts as present.
///
/// Null, `false`, zero, empty strings, empty lists and empty mappings do not.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Sequence(seq) => !seq.is_empty(),
        Value::Mapping(map) => !map.is_empty(),
        Value::Tagged(tagged) => is_truthy(&tagged.value),
    }
}

/// Replaces the top-level language key of a document with `lang`.
///
/// The backend cannot store script modifiers such as `ug@Latn`, so the key
/// it returns is rewritten to the output language code. The rest of the text
/// is left untouched.
///
/// # Errors
///
/// Returns `ParseError::Yaml` if no top-level key is found.
pub fn rewrite_language_key(lang: &str, content: &str) -> Result<String, ParseError> {
    let mut offset = 0;
    for line in content.split_inclusive('\n') {
        let trimmed = line.trim_start_matches('\u{feff}').trim();
        let skip = trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("---");
        if !skip && !line.starts_with(char::is_whitespace) {
            if let Some(colon) = line.find(':') {
                let start = offset + colon;
                return Ok(format!("{}{lang}{}", &content[..offset], &content[start..]));
            }
            break;
        }
        offset += line.len();
    }

    Err(ParseError::Yaml {
        message: "no top-level language key found".to_string(),
    })
}
