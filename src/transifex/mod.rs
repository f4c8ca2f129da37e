// txsync: Transifex translation sync tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Transifex v2 API client.
//!
//! ```text
//! TransifexClient { base_url, credentials }
//!   translation(res, lang)     GET {base}/resource/{res}/translation/{lang}/
//!                              --> content
//!   resource_stats(res)        GET {base}/resource/{res}/stats/
//!                              --> { lang: LanguageStats }
//!   language_stats(res, lang)  GET {base}/resource/{res}/stats/{lang}/
//!                              --> LanguageStats
//! ```
//!
//! Every request carries basic auth. No retries at this layer.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::config::credentials::Credentials;
use crate::error::TxResult;
use crate::net::ApiRequest;

/// Body of a translation download.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationResponse {
    /// File content in the resource's native format.
    pub content: String,
}

/// Completion statistics of one language of a resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LanguageStats {
    /// Completion as reported by the backend, e.g. `"42%"`.
    pub completed: String,
    #[serde(default)]
    pub translated_entities: u64,
    #[serde(default)]
    pub untranslated_entities: u64,
}

impl LanguageStats {
    /// Completion percentage, if `completed` is a number followed by `%`.
    #[must_use]
    pub fn completion_percent(&self) -> Option<u8> {
        self.completed.trim().trim_end_matches('%').trim().parse().ok()
    }

    /// Translated plus untranslated entities.
    #[must_use]
    pub const fn total_entities(&self) -> u64 {
        self.translated_entities + self.untranslated_entities
    }

    /// True when nothing at all is translated.
    #[must_use]
    pub fn is_untranslated(&self) -> bool {
        self.completion_percent() == Some(0)
    }
}

/// Read-only client for one Transifex project.
#[derive(Debug, Clone)]
pub struct TransifexClient {
    base_url: String,
    credentials: Credentials,
}

impl TransifexClient {
    /// `base_url` is the project API root, e.g.
    /// `https://www.transifex.com/api/2/project/Psiphon3`.
    #[must_use]
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            credentials,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, command: &str) -> String {
        format!("{}/{command}/", self.base_url)
    }

    fn request(&self, command: &str) -> ApiRequest {
        ApiRequest::new()
            .url(self.endpoint(command))
            .basic_auth(&self.credentials.username, &self.credentials.password)
            .header("Accept", "application/json")
    }

    /// Downloads the translation of `resource` into backend language `lang`.
    ///
    /// # Errors
    ///
    /// Returns a `NetworkError` if the request fails or the body lacks
    /// `content`.
    pub async fn translation(&self, resource: &str, lang: &str) -> TxResult<String> {
        let response: TranslationResponse = self
            .request(&format!("resource/{resource}/translation/{lang}"))
            .fetch_json()
            .await?;
        Ok(response.content)
    }

    /// Completion statistics of every language of `resource`.
    ///
    /// # Errors
    ///
    /// Returns a `NetworkError` if the request fails or the body is not a
    /// language → statistics object.
    pub async fn resource_stats(&self, resource: &str) -> TxResult<BTreeMap<String, LanguageStats>> {
        self.request(&format!("resource/{resource}/stats"))
            .fetch_json()
            .await
    }

    /// Completion statistics of one language of `resource`.
    ///
    /// # Errors
    ///
    /// Returns a `NetworkError` if the request fails or the body is not a
    /// statistics object.
    pub async fn language_stats(&self, resource: &str, lang: &str) -> TxResult<LanguageStats> {
        self.request(&format!("resource/{resource}/stats/{lang}"))
            .fetch_json()
            .await
    }
}
