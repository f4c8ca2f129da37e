// txsync: Transifex translation sync tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for txsync using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! txsync [global options] <command>
//! version
//! options
//! inis
//! pull [-r RESOURCE]... [-j N]
//! stats RESOURCE [LANG]
//! gather RESOURCE [--skip-untranslated] [-o FILE]
//! ```

pub mod global;
pub mod pull;


use crate::cli::global::GlobalOptions;
use crate::cli::pull::{GatherArgs, PullArgs, StatsArgs};
use clap::{Parser, Subcommand};

/// Transifex translation sync tool
///
/// Pulls translations and merges them into the app's string tables and
/// store assets.
#[derive(Debug, Parser)]
#[command(
    name = "txsync",
    author,
    version,
    about = "Transifex translation sync tool",
    long_about = "txsync Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Pulls translations from Transifex, keeps earlier translations\n\
                  where the backend only has the English fallback, flags\n\
                  untranslated strings and writes the localized files.\n\n\
                  Invoking `txsync pull` from the repository root pulls every\n\
                  configured resource. See `txsync <command> --help` for more\n\
                  information about a command.",
    after_help = "CONFIGURATION:\n\n\
                  txsync reads `txsync.toml` from the current directory if it\n\
                  exists, then every --ini file in order, then TXSYNC_* environment\n\
                  variables, then --set overrides. Use --no-default-inis to only\n\
                  use --ini.\n\n\
                  CREDENTIALS:\n\n\
                  `transifex_conf.json` holding {\"username\": ..., \"password\": ...}\n\
                  is taken from --credentials if that file exists, else from the\n\
                  current directory, else from the directory of the executable."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the configuration files used.
    Inis,

    /// Pulls, merges and writes translations.
    Pull(PullArgs),

    /// Shows translation completion statistics.
    Stats(StatsArgs),

    /// Prints every translation of a resource as JSON.
    Gather(GatherArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
