// txsync: Transifex translation sync tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments of the backend commands.
//!
//! ```text
//! pull   [-r RESOURCE]... [-j N]       all configured resources by default
//! stats  RESOURCE [LANG]               whole resource or one language
//! gather RESOURCE [--skip-untranslated] [-o FILE]
//! ```

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `pull` command.
#[derive(Debug, Clone, Default, Args)]
pub struct PullArgs {
    /// Resource to pull; can be repeated. Defaults to every configured resource.
    #[arg(short = 'r', long = "resource", value_name = "RESOURCE", action = clap::ArgAction::Append)]
    pub resources: Vec<String>,

    /// Languages processed concurrently, overrides transifex.jobs.
    #[arg(short = 'j', long = "jobs", value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    pub jobs: Option<u16>,
}

/// Arguments for the `stats` command.
#[derive(Debug, Clone, Args)]
pub struct StatsArgs {
    /// Resource name.
    #[arg(value_name = "RESOURCE")]
    pub resource: String,

    /// Backend language code; all languages if omitted.
    #[arg(value_name = "LANG")]
    pub lang: Option<String>,
}

/// Arguments for the `gather` command.
#[derive(Debug, Clone, Args)]
pub struct GatherArgs {
    /// Resource name.
    #[arg(value_name = "RESOURCE")]
    pub resource: String,

    /// Leaves out languages with no translated strings.
    #[arg(long = "skip-untranslated")]
    pub skip_untranslated: bool,

    /// Writes the JSON to a file instead of stdout.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,
}
