// txsync: Transifex translation sync tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |            pull / stats / gather
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              | TOML, languages, creds    |
//!              '-------------+-------------'
//!                            v
//!                        pipeline
//!                  per resource, per language
//!                 |          |              |
//!                 v          v              v
//!            transifex     merge      utility::fs
//!             (net)    strings/yaml   atomic writes
//!                            |
//!                            v
//!                         formats
//!                   .strings, store YAML
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod formats;
pub mod logging;
pub mod merge;
pub mod net;
pub mod pipeline;
pub mod transifex;
pub mod utility;
