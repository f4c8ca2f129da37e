// txsync: Transifex translation sync tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `options` and `inis` commands.

use crate::config::Config;

/// Prints every effective option as `key = value`, credentials excluded.
pub fn run_options_command(config: &Config) {
    for line in config.format_options() {
        println!("{line}");
    }
}

/// Prints the configuration files in load order.
pub fn run_inis_command(config_files: &[String]) {
    if config_files.is_empty() {
        println!("no configuration files, using built-in defaults");
        return;
    }
    for line in config_files {
        println!("{line}");
    }
}
