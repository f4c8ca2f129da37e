// txsync: Transifex translation sync tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --ini FILE          ← Additional config files (can repeat)
//! --dry               ← Fetch and merge, but write nothing
//! --log-level N       ← Console verbosity (0-6)
//! --file-log-level    ← File verbosity (overrides --log-level)
//! --log-file FILE     ← Append logs here
//! --log-json          ← JSON lines in the log file
//! --root DIR          ← paths.root override
//! --credentials FILE  ← paths.credentials override
//! --set KEY=VAL       ← Direct config override
//!
//! Precedence: CLI flags > --set > env > --ini > txsync.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'i', long = "ini", value_name = "FILE", action = clap::ArgAction::Append)]
    pub inis: Vec<PathBuf>,

    /// Fetches and merges translations but only logs the files it would write.
    #[arg(long)]
    pub dry: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Appends logs to this file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Writes the log file as JSON lines.
    #[arg(long = "log-json", requires = "log_file")]
    pub log_json: bool,

    /// Repository root containing the string tables and store assets.
    #[arg(short = 'C', long = "root", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Credentials file (`{"username": ..., "password": ...}`).
    /// Ignored if it does not exist.
    #[arg(short = 'c', long = "credentials", value_name = "FILE")]
    pub credentials: Option<PathBuf>,

    /// Sets an option, such as 'transifex.jobs=4' or 'paths/strings=Strings'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "OPTION", action = clap::ArgAction::Append)]
    pub options: Vec<String>,

    /// Disables loading txsync.toml from the current directory, only uses --ini.
    #[arg(long = "no-default-inis")]
    pub no_default_inis: bool,
}

impl GlobalOptions {
    /// Converts command-line options to configuration overrides.
    ///
    /// `--set` values come first so that dedicated flags win.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<String> {
        let mut overrides = self.options.clone();

        if let Some(ref root) = self.root {
            overrides.push(format!("paths.root={}", root.display()));
        }

        if let Some(ref credentials) = self.credentials {
            overrides.push(format!("paths.credentials={}", credentials.display()));
        }

        overrides
    }
}
