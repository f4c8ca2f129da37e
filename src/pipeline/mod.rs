// txsync: Transifex translation sync tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Resource pipeline.
//!
//! ```text
//! ResourcePipeline::new(client, config)
//!   .with_jobs()  .with_dry_run()  .with_cancel_token()
//!
//! process(resource)
//!   resource_stats --> report unmapped languages above threshold
//!   MergeStrategy::load(kind, master)          once per resource
//!   per language (buffer_unordered(jobs)):
//!     cancelled? --> Interrupted
//!     translation(backend) --> strategy.apply(output)
//!       --> normalize \r\n --> write_output(output_path)
//!   --> PullSummary
//!
//! gather(resource, skip_untranslated)
//!   per language: [language_stats == 0%? skip] --> translation
//!   --> { output: content }
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;

use futures_util::{StreamExt, TryStreamExt, stream};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::config::Config;
use crate::config::paths::PathsConfig;
use crate::config::types::{LanguageMapping, ResourceConfig};
use crate::error::{PipelineError, TxResult};
use crate::merge::MergeStrategy;
use crate::transifex::TransifexClient;
use crate::utility::encoding::normalize_line_endings;
use crate::utility::fs::{WriteOptions, write_output};

/// A backend language with enough progress to matter that is not pulled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLanguage {
    pub lang: String,
    pub completed: String,
    pub translated: u64,
    pub total: u64,
}

/// Result of pulling one resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullSummary {
    /// Resource name.
    pub resource: String,
    /// Merge strategy that was applied.
    pub strategy: &'static str,
    /// Output language and path of every file written, sorted by language.
    pub written: Vec<(String, PathBuf)>,
    /// Unmapped languages above the completion threshold.
    pub skipped: Vec<SkippedLanguage>,
}

/// Pulls, merges and writes the translations of configured resources.
pub struct ResourcePipeline {
    client: TransifexClient,
    languages: Vec<LanguageMapping>,
    paths: PathsConfig,
    threshold: u8,
    jobs: usize,
    dry_run: bool,
    cancel_token: CancellationToken,
}

impl ResourcePipeline {
    /// Creates a pipeline using the languages, paths and limits of `config`.
    #[must_use]
    pub fn new(client: TransifexClient, config: &Config) -> Self {
        Self {
            client,
            languages: config.languages.clone(),
            paths: config.paths.clone(),
            threshold: config.transifex.threshold,
            jobs: config.transifex.jobs.max(1),
            dry_run: false,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Sets how many languages are processed concurrently.
    #[must_use]
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    /// Sets dry-run mode.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Uses an externally owned cancellation token.
    #[must_use]
    pub fn with_cancel_token(mut self, token: CancellationToken) -> Self {
        self.cancel_token = token;
        self
    }

    /// Returns the cancellation token for sharing with signal handlers.
    #[must_use]
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    /// Returns whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }

    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    #[must_use]
    pub const fn jobs(&self) -> usize {
        self.jobs
    }

    fn check_cancelled(&self, resource: &str) -> TxResult<()> {
        if self.is_cancelled() {
            return Err(PipelineError::Interrupted(resource.to_string()).into());
        }
        Ok(())
    }

    /// Logs every language above the threshold that is neither English nor
    /// mapped, and returns them.
    ///
    /// # Errors
    ///
    /// Returns a `NetworkError` if the statistics cannot be fetched.
    pub async fn report_skipped(&self, resource: &str) -> TxResult<Vec<SkippedLanguage>> {
        let stats = self.client.resource_stats(resource).await?;

        let skipped: Vec<SkippedLanguage> = stats
            .into_iter()
            .filter(|(lang, _)| lang != "en" && !self.languages.iter().any(|l| &l.backend == lang))
            .filter(|(_, s)| s.completion_percent().is_some_and(|p| p > self.threshold))
            .map(|(lang, s)| SkippedLanguage {
                total: s.total_entities(),
                translated: s.translated_entities,
                completed: s.completed,
                lang,
            })
            .collect();

        for s in &skipped {
            info!(
                resource,
                lang = %s.lang,
                completed = %s.completed,
                translated = s.translated,
                total = s.total,
                "skipping language"
            );
        }
        Ok(skipped)
    }

    /// Pulls every mapped language of `resource` and writes the merged files.
    ///
    /// # Errors
    ///
    /// Returns an error if a request fails, an output file cannot be written,
    /// or the run is cancelled. Merge problems are only logged.
    pub async fn process(&self, resource: &ResourceConfig) -> TxResult<PullSummary> {
        info!(resource = %resource.name, kind = %resource.kind, "processing resource");
        self.check_cancelled(&resource.name)?;

        let skipped = self.report_skipped(&resource.name).await?;

        let master_path = self.paths.master_path(resource);
        let strategy = MergeStrategy::load(resource.kind, &master_path);
        debug!(
            resource = %resource.name,
            strategy = strategy.name(),
            master = %master_path.display(),
            "merge strategy selected"
        );

        let options = WriteOptions {
            encoding: resource.encoding,
            bom: resource.bom,
            dry_run: self.dry_run,
        };

        let mut written: Vec<(String, PathBuf)> = stream::iter(&self.languages)
            .map(|lang| self.process_language(resource, &strategy, lang, options))
            .buffer_unordered(self.jobs)
            .try_collect()
            .await?;
        written.sort();

        info!(
            resource = %resource.name,
            languages = written.len(),
            "resource done"
        );

        Ok(PullSummary {
            resource: resource.name.clone(),
            strategy: strategy.name(),
            written,
            skipped,
        })
    }

    async fn process_language(
        &self,
        resource: &ResourceConfig,
        strategy: &MergeStrategy,
        lang: &LanguageMapping,
        options: WriteOptions,
    ) -> TxResult<(String, PathBuf)> {
        self.check_cancelled(&resource.name)?;

        let fresh = self.client.translation(&resource.name, &lang.backend).await?;
        let output_path = self.paths.output_path(resource, &lang.output);

        let merged = strategy.apply(&lang.output, &fresh, &output_path);
        let content = normalize_line_endings(&merged);

        write_output(&output_path, &content, options)?;
        debug!(
            resource = %resource.name,
            lang = %lang.output,
            path = %output_path.display(),
            "translation written"
        );
        Ok((lang.output.clone(), output_path))
    }

    /// Collects the raw translation of every mapped language of `resource`,
    /// keyed by output language.
    ///
    /// With `skip_untranslated`, languages whose statistics report `0%` are
    /// left out.
    ///
    /// # Errors
    ///
    /// Returns an error if a request fails or the run is cancelled.
    pub async fn gather(
        &self,
        resource: &str,
        skip_untranslated: bool,
    ) -> TxResult<BTreeMap<String, String>> {
        let pairs: Vec<Option<(String, String)>> = stream::iter(&self.languages)
            .map(|lang| self.gather_language(resource, lang, skip_untranslated))
            .buffer_unordered(self.jobs)
            .try_collect()
            .await?;

        Ok(pairs.into_iter().flatten().collect())
    }

    async fn gather_language(
        &self,
        resource: &str,
        lang: &LanguageMapping,
        skip_untranslated: bool,
    ) -> TxResult<Option<(String, String)>> {
        self.check_cancelled(resource)?;

        if skip_untranslated {
            let stats = self.client.language_stats(resource, &lang.backend).await?;
            if stats.is_untranslated() {
                debug!(resource, lang = %lang.backend, "no translations, skipped");
                return Ok(None);
            }
        }

        let content = self.client.translation(resource, &lang.backend).await?;
        Ok(Some((
            lang.output.clone(),
            normalize_line_endings(&content).into_owned(),
        )))
    }
}

#[cfg(test)]
mod tests;
