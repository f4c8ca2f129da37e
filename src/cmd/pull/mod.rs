// txsync: Transifex translation sync tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Backend command implementations for txsync.
//!
//! ```text
//! Credentials::discover(paths.credentials)
//!   --> TransifexClient(transifex.url)
//!        |
//!        +--> pull    ResourcePipeline::process per resource
//!        +--> stats   resource_stats / language_stats
//!        +--> gather  ResourcePipeline::gather --> JSON
//! ```

use anyhow::Context;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::cli::pull::{GatherArgs, PullArgs, StatsArgs};
use crate::config::Config;
use crate::config::credentials::Credentials;
use crate::config::types::ResourceConfig;
use crate::error::Result;
use crate::pipeline::ResourcePipeline;
use crate::transifex::{LanguageStats, TransifexClient};
use crate::utility::fs::{WriteOptions, write_output};

fn connect(config: &Config) -> Result<TransifexClient> {
    let credentials = Credentials::discover(config.paths.credentials.as_deref())
        .context("cannot load Transifex credentials")?;
    Ok(TransifexClient::new(&config.transifex.url, credentials))
}

fn selected_resources<'a>(args: &PullArgs, config: &'a Config) -> Result<Vec<&'a ResourceConfig>> {
    if args.resources.is_empty() {
        return Ok(config.resources.iter().collect());
    }
    args.resources
        .iter()
        .map(|name| config.resource(name).map_err(Into::into))
        .collect()
}

/// Pulls the selected resources.
///
/// # Errors
///
/// Returns an error if credentials cannot be loaded, a resource is unknown,
/// a request or write fails, or the run is cancelled.
pub async fn run_pull_command(
    args: &PullArgs,
    config: &Config,
    dry_run: bool,
    cancel_token: CancellationToken,
) -> Result<()> {
    let resources = selected_resources(args, config)?;
    let client = connect(config)?;

    let mut pipeline = ResourcePipeline::new(client, config)
        .with_dry_run(dry_run)
        .with_cancel_token(cancel_token);
    if let Some(jobs) = args.jobs {
        pipeline = pipeline.with_jobs(usize::from(jobs));
    }

    for resource in resources {
        let summary = pipeline
            .process(resource)
            .await
            .with_context(|| format!("failed to pull resource '{}'", resource.name))?;
        println!(
            "{}: DONE ({} languages, {})",
            summary.resource,
            summary.written.len(),
            summary.strategy
        );
    }

    info!("finished");
    Ok(())
}

fn format_stats(lang: &str, stats: &LanguageStats) -> String {
    format!(
        "{lang:<10} {:>5} ({} of {})",
        stats.completed,
        stats.translated_entities,
        stats.total_entities()
    )
}

/// Prints completion statistics of a resource or one of its languages.
///
/// # Errors
///
/// Returns an error if credentials cannot be loaded or the request fails.
pub async fn run_stats_command(args: &StatsArgs, config: &Config) -> Result<()> {
    let client = connect(config)?;

    if let Some(lang) = &args.lang {
        let stats = client.language_stats(&args.resource, lang).await?;
        println!("{}", format_stats(lang, &stats));
    } else {
        for (lang, stats) in client.resource_stats(&args.resource).await? {
            println!("{}", format_stats(&lang, &stats));
        }
    }
    Ok(())
}

/// Prints or writes every translation of a resource as a JSON object keyed
/// by output language.
///
/// # Errors
///
/// Returns an error if credentials cannot be loaded, a request fails, the
/// output cannot be written, or the run is cancelled.
pub async fn run_gather_command(
    args: &GatherArgs,
    config: &Config,
    dry_run: bool,
    cancel_token: CancellationToken,
) -> Result<()> {
    let client = connect(config)?;
    let pipeline = ResourcePipeline::new(client, config)
        .with_dry_run(dry_run)
        .with_cancel_token(cancel_token);

    let translations = pipeline
        .gather(&args.resource, args.skip_untranslated)
        .await
        .with_context(|| format!("failed to gather resource '{}'", args.resource))?;
    let json = serde_json::to_string_pretty(&translations)?;

    match &args.output {
        Some(path) => {
            let options = WriteOptions {
                dry_run,
                ..WriteOptions::default()
            };
            write_output(path, &format!("{json}\n"), options)?;
        }
        None => println!("{json}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests;
