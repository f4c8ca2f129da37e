// txsync: Transifex translation sync tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for txsync.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. txsync.toml (cwd)
//! 3. --ini
//! 4. TXSYNC_* env vars
//! 5. --set overrides
//! 6. CLI flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! TXSYNC_TRANSIFEX__JOBS=4       → transifex.jobs = 4
//! TXSYNC_PATHS__ROOT=/repo       → paths.root = "/repo"
//! ```
//!
//! # Languages and Resources
//!
//! ```toml
//! [[languages]]
//! backend = "zh_TW"
//! output = "zh-Hant"
//!
//! [[resources]]
//! name = "ios-vpn-app-localizablestrings"
//! kind = "strings"
//! file = "Localizable.strings"
//! ```
//!
//! Either table replaces the built-in list as a whole.

pub mod credentials;
pub mod loader;
pub mod paths;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use crate::error::{ConfigError, PipelineError, Result};

use loader::ConfigLoader;
use paths::PathsConfig;
use types::{
    LanguageMapping, ResourceConfig, ResourceKind, TransifexConfig, default_languages,
    default_resources,
};

/// Complete application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Backend settings.
    pub transifex: TransifexConfig,
    /// Output layout.
    pub paths: PathsConfig,
    /// Backend → output language table.
    pub languages: Vec<LanguageMapping>,
    /// Resources to pull.
    pub resources: Vec<ResourceConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            transifex: TransifexConfig::default(),
            paths: PathsConfig::default(),
            languages: default_languages(),
            resources: default_resources(),
        }
    }
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use txsync::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("txsync.toml")
    ///     .with_env_prefix("TXSYNC")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validate the merged configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] or [`ConfigError::MissingKey`]
    /// describing the first problem found.
    pub fn resolve_and_validate(&mut self) -> Result<()> {
        self.transifex.url = self.transifex.url.trim_end_matches('/').to_string();
        if !self.transifex.url.starts_with("http://") && !self.transifex.url.starts_with("https://")
        {
            return Err(invalid("transifex", "url", "must be an http(s) URL").into());
        }
        if self.transifex.threshold > 100 {
            return Err(invalid("transifex", "threshold", "must be between 0 and 100").into());
        }
        if self.transifex.jobs == 0 {
            return Err(invalid("transifex", "jobs", "must be at least 1").into());
        }

        let mut backends = HashSet::new();
        let mut outputs = HashSet::new();
        for lang in &self.languages {
            if lang.backend.is_empty() || lang.output.is_empty() {
                return Err(invalid("languages", "backend", "language codes must not be empty").into());
            }
            if !backends.insert(lang.backend.as_str()) {
                return Err(invalid(
                    "languages",
                    "backend",
                    &format!("'{}' is listed twice", lang.backend),
                )
                .into());
            }
            if !outputs.insert(lang.output.as_str()) {
                return Err(invalid(
                    "languages",
                    "output",
                    &format!("'{}' is listed twice", lang.output),
                )
                .into());
            }
        }

        let mut names = HashSet::new();
        for resource in &self.resources {
            if !names.insert(resource.name.as_str()) {
                return Err(invalid(
                    "resources",
                    "name",
                    &format!("'{}' is listed twice", resource.name),
                )
                .into());
            }
            if resource.kind == ResourceKind::Strings
                && resource.file.as_deref().is_none_or(str::is_empty)
            {
                return Err(ConfigError::MissingKey {
                    section: format!("resources.{}", resource.name),
                    key: "file".to_string(),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Looks up a configured resource by name.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::UnknownResource`] if no such resource exists.
    pub fn resource(&self, name: &str) -> std::result::Result<&ResourceConfig, PipelineError> {
        self.resources
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| PipelineError::UnknownResource(name.to_string()))
    }

    /// Format configuration options for display.
    ///
    /// Returns a vector of formatted strings representing all configuration options.
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_transifex_options(&mut options);
        self.format_paths_options(&mut options);
        self.format_language_options(&mut options);
        self.format_resource_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_transifex_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("transifex.url".into(), self.transifex.url.clone());
        options.insert(
            "transifex.threshold".into(),
            self.transifex.threshold.to_string(),
        );
        options.insert("transifex.jobs".into(), self.transifex.jobs.to_string());
    }

    fn format_paths_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("paths.root".into(), self.paths.root.display().to_string());
        options.insert(
            "paths.strings".into(),
            self.paths.strings.display().to_string(),
        );
        options.insert(
            "paths.store_assets".into(),
            self.paths.store_assets.display().to_string(),
        );
        if let Some(credentials) = &self.paths.credentials {
            options.insert(
                "paths.credentials".into(),
                credentials.display().to_string(),
            );
        }
    }

    fn format_language_options(&self, options: &mut BTreeMap<String, String>) {
        for lang in &self.languages {
            options.insert(format!("languages.{}", lang.backend), lang.output.clone());
        }
    }

    fn format_resource_options(&self, options: &mut BTreeMap<String, String>) {
        for resource in &self.resources {
            let prefix = format!("resources.{}", resource.name);
            options.insert(format!("{prefix}.kind"), resource.kind.to_string());
            if let Some(file) = &resource.file {
                options.insert(format!("{prefix}.file"), file.clone());
            }
            options.insert(format!("{prefix}.bom"), resource.bom.to_string());
            options.insert(format!("{prefix}.encoding"), resource.encoding.to_string());
        }
    }
}

fn invalid(section: &str, key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        message: message.to_string(),
    }
}
