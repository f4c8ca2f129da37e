// txsync: Transifex translation sync tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Apple `.strings` string tables.
//!
//! ```text
//! /*comment*/
//! "key" = "value";
//!
//! parse()   text --> StringsFile { entries: [StringsEntry] }
//! Display   StringsFile --> text (one block per entry)
//! ```
//!
//! The `[UNTRANSLATED]` comment prefix only exists in text. In memory it is
//! the `untranslated` flag of an entry.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{ParseError, TxResult};
use crate::utility::fs::read_text;

/// Comment prefix marking an entry whose value is the English fallback.
pub const UNTRANSLATED_FLAG: &str = "[UNTRANSLATED]";

/// A single `"key" = "value";` record with its preceding comment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StringsEntry {
    /// Identifier, unique within one table.
    pub key: String,
    /// Unescaped localized text.
    pub value: String,
    /// Comment text without the `/* */` markers and without the flag.
    pub comment: String,
    /// Value was filled in with English by the backend.
    pub untranslated: bool,
}

impl StringsEntry {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    #[must_use]
    pub const fn flagged(mut self, untranslated: bool) -> Self {
        self.untranslated = untranslated;
        self
    }

    /// Splits a raw comment into its text and the untranslated flag.
    ///
    /// Only a leading flag counts, which is the only form the writer emits.
    fn from_raw_comment(raw: &str) -> (String, bool) {
        match raw.strip_prefix(UNTRANSLATED_FLAG) {
            Some(rest) => (rest.to_string(), true),
            None => (raw.to_string(), false),
        }
    }
}

impl fmt::Display for StringsEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = if self.untranslated {
            UNTRANSLATED_FLAG
        } else {
            ""
        };
        write!(
            f,
            "/*{flag}{}*/\n\"{}\" = \"{}\";\n\n",
            self.comment,
            escape(&self.key),
            escape(&self.value)
        )
    }
}

/// An ordered string table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StringsFile {
    /// Entries in file order.
    pub entries: Vec<StringsEntry>,
}

impl StringsFile {
    #[must_use]
    pub const fn new(entries: Vec<StringsEntry>) -> Self {
        Self { entries }
    }

    /// Parses string table text.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Strings` for text that is neither whitespace, a
    /// comment nor an entry, and `ParseError::DuplicateKey` for repeated keys.
    pub fn parse(content: &str) -> Result<Self, ParseError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let re = token_regex();

        let mut entries = Vec::new();
        let mut seen = HashSet::new();
        let mut pending_comment: Option<&str> = None;
        let mut pos = 0;

        while pos < content.len() {
            let rest = &content[pos..];
            let Some(caps) = re.captures(rest) else {
                return Err(ParseError::Strings {
                    line: line_of(content, pos),
                    fragment: fragment(rest),
                });
            };

            if let Some(comment) = caps.name("comment") {
                pending_comment = Some(comment.as_str());
            } else if let (Some(key), Some(value)) = (caps.name("key"), caps.name("value")) {
                let key = unescape(key.as_str());
                if !seen.insert(key.clone()) {
                    return Err(ParseError::DuplicateKey {
                        line: line_of(content, pos),
                        key,
                    });
                }
                let (comment, untranslated) =
                    StringsEntry::from_raw_comment(pending_comment.take().unwrap_or_default());
                entries.push(StringsEntry {
                    key,
                    value: unescape(value.as_str()),
                    comment,
                    untranslated,
                });
            }

            pos += caps.get(0).map_or(rest.len(), |m| m.end());
        }

        Ok(Self { entries })
    }

    /// Reads and parses a string table from disk.
    ///
    /// # Errors
    ///
    /// Returns an `FsError` if the file cannot be read and a `ParseError` if it
    /// is malformed.
    pub fn read(path: &Path) -> TxResult<Self> {
        let content = read_text(path)?;
        Ok(Self::parse(&content)?)
    }

    /// Looks up an entry by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&StringsEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// Builds a key index for repeated lookups.
    #[must_use]
    pub fn index(&self) -> HashMap<&str, &StringsEntry> {
        self.entries.iter().map(|e| (e.key.as_str(), e)).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromStr for StringsFile {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for StringsFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

/// Whitespace, block comment, line comment or entry, anchored at the start.
fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"^(?:\s+|/\*(?P<comment>(?s:.*?))\*/|//[^\n]*|"(?P<key>(?:[^"\\]|\\(?s:.))*)"\s*=\s*"(?P<value>(?:[^"\\]|\\(?s:.))*)"\s*;)"#,
        )
        .expect("strings token regex is valid")
    })
}

fn line_of(content: &str, pos: usize) -> usize {
    content[..pos].bytes().filter(|&b| b == b'\n').count() + 1
}

fn fragment(rest: &str) -> String {
    rest.lines()
        .next()
        .unwrap_or_default()
        .chars()
        .take(60)
        .collect()
}

/// Escapes a key or value for emission.
#[must_use]
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

/// Reads four hex digits from the front of `chars`, advancing only on success.
fn take_hex4<'a>(chars: &mut std::str::Chars<'a>) -> Option<(u16, &'a str)> {
    let digits = chars
        .as_str()
        .get(..4)
        .filter(|d| d.bytes().all(|b| b.is_ascii_hexdigit()))?;
    let unit = u16::from_str_radix(digits, 16).ok()?;
    chars.nth(3);
    Some((unit, digits))
}

/// Reads a `\Uxxxx` escape that must immediately follow a high surrogate.
fn take_low_surrogate(chars: &mut std::str::Chars<'_>) -> Option<u16> {
    let mut ahead = chars.clone();
    if ahead.next() != Some('\\') || !matches!(ahead.next(), Some('U' | 'u')) {
        return None;
    }
    let (unit, _) = take_hex4(&mut ahead).filter(|(u, _)| (0xDC00..=0xDFFF).contains(u))?;
    *chars = ahead;
    Some(unit)
}

/// Resolves backslash escapes in a quoted key or value.
///
/// `\Uxxxx` pairs encoding a UTF-16 surrogate pair become one character. An
/// unpaired surrogate escape is kept as written.
#[must_use]
pub fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(u @ ('U' | 'u')) => {
                let Some((unit, digits)) = take_hex4(&mut chars) else {
                    out.push(u);
                    continue;
                };
                let low = if (0xD800..=0xDBFF).contains(&unit) {
                    take_low_surrogate(&mut chars)
                } else {
                    None
                };
                let decoded: Result<String, _> =
                    char::decode_utf16([Some(unit), low].into_iter().flatten()).collect();
                match decoded {
                    Ok(text) => out.push_str(&text),
                    Err(_) => {
                        out.push('\\');
                        out.push(u);
                        out.push_str(digits);
                    }
                }
            }
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
