// txsync: Transifex translation sync tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! encoding
//!   decode_bytes()            BOM sniffing --> UTF-8
//!   encode_text()             UTF-8 --> [BOM] + UTF-8/UTF-16LE
//!   normalize_line_endings()  CRLF --> LF
//! fs
//!   read_text()     decoded file read
//!   write_output()  mkdir -p + atomic replace
//! ```

pub mod encoding;
pub mod fs;
