// txsync: Transifex translation sync tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Text encoding for localized resource files.
//!
//! ```text
//! Read                          Write
//! bytes --(BOM sniff)--> UTF-8  UTF-8 --(encode)--> [BOM] + UTF-8/UTF-16LE
//! ```
//!
//! Uses `encoding_rs` for decoding. Invalid sequences → U+FFFD.

use encoding_rs::UTF_8;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Encoding used when writing a resource file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputEncoding {
    /// UTF-8
    #[default]
    #[serde(rename = "utf-8", alias = "utf8")]
    Utf8,
    /// UTF-16 Little Endian, as used by older Xcode `.strings` files
    #[serde(rename = "utf-16le", alias = "utf16le")]
    Utf16Le,
}

impl std::fmt::Display for OutputEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Utf8 => write!(f, "utf-8"),
            Self::Utf16Le => write!(f, "utf-16le"),
        }
    }
}

/// Decodes file content to UTF-8, honouring a leading byte-order mark.
///
/// Without a BOM the content is taken as UTF-8. The BOM itself is removed.
///
/// # Example
/// ```
/// use txsync::utility::encoding::decode_bytes;
///
/// let text = decode_bytes(b"\xFF\xFEH\x00i\x00");
/// assert_eq!(text, "Hi");
/// ```
#[must_use]
pub fn decode_bytes(bytes: &[u8]) -> Cow<'_, str> {
    let (text, _encoding, _had_errors) = UTF_8.decode(bytes);
    text
}

/// Encodes text for writing, optionally prefixed with a byte-order mark.
#[must_use]
pub fn encode_text(text: &str, encoding: OutputEncoding, bom: bool) -> Vec<u8> {
    match encoding {
        OutputEncoding::Utf8 => {
            let mut out = Vec::with_capacity(text.len() + 3);
            if bom {
                out.extend_from_slice(b"\xEF\xBB\xBF");
            }
            out.extend_from_slice(text.as_bytes());
            out
        }
        OutputEncoding::Utf16Le => {
            let mut out = Vec::with_capacity(text.len() * 2 + 2);
            if bom {
                out.extend_from_slice(&[0xFF, 0xFE]);
            }
            for unit in text.encode_utf16() {
                out.extend_from_slice(&unit.to_le_bytes());
            }
            out
        }
    }
}

/// Converts CRLF line endings to LF.
#[must_use]
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains("\r\n") {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}
