// txsync: Transifex translation sync tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Resource file formats.
//!
//! ```text
//! strings   Apple .strings tables    StringsFile / StringsEntry
//! yaml      store asset documents    StoreAssetsDocument
//! ```

pub mod strings;
pub mod yaml;
