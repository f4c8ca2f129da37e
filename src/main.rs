// txsync: Transifex translation sync tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Ctrl-C --> Command Dispatch
//!   Version | Options | Inis | Pull | Stats | Gather
//! ```

use std::process::ExitCode;

use tokio_util::sync::CancellationToken;
use tracing::warn;

use txsync::cli::global::GlobalOptions;
use txsync::cli::{self, Command};
use txsync::cmd::config::{run_inis_command, run_options_command};
use txsync::cmd::pull::{run_gather_command, run_pull_command, run_stats_command};
use txsync::config::Config;
use txsync::config::loader::{ConfigLoader, DEFAULT_CONFIG_FILENAME};
use txsync::logging::init_logging;
use txsync::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    let cancel_token = CancellationToken::new();
    spawn_interrupt_handler(cancel_token.clone());

    dispatch_command(&cli, cancel_token).await
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .with_json_file(global.log_json)
        .build()
}

fn spawn_interrupt_handler(cancel_token: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupted, stopping after the current language");
            cancel_token.cancel();
        }
    });
}

async fn dispatch_command(cli: &cli::Cli, cancel_token: CancellationToken) -> ExitCode {
    let dry = cli.global.dry;
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            load_config(&cli.global).map(|config| run_options_command(&config))
        }
        Some(Command::Inis) => {
            let loader = build_config_loader(&cli.global);
            run_inis_command(&loader.format_loaded_files());
            Ok(())
        }
        Some(Command::Pull(args)) => match load_config(&cli.global) {
            Ok(config) => run_pull_command(args, &config, dry, cancel_token).await,
            Err(e) => Err(e),
        },
        Some(Command::Stats(args)) => match load_config(&cli.global) {
            Ok(config) => run_stats_command(args, &config).await,
            Err(e) => Err(e),
        },
        Some(Command::Gather(args)) => match load_config(&cli.global) {
            Ok(config) => run_gather_command(args, &config, dry, cancel_token).await,
            Err(e) => Err(e),
        },
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    if !global.no_default_inis {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILENAME);
    }
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    loader.with_env_prefix("TXSYNC")
}

fn load_config(global: &GlobalOptions) -> txsync::error::Result<Config> {
    build_config_loader(global)
        .with_overrides(&global.to_config_overrides())
        .and_then(ConfigLoader::build)
        .map_err(|e| {
            eprintln!("Failed to load config: {e}");
            e
        })
}
