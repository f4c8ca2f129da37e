// txsync: Transifex translation sync tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Authenticated HTTP requests.
//!
//! ```text
//! ApiRequest::new()
//!   .url() .basic_auth() .header()
//!        |
//!        v
//!   fetch_json()
//!        |
//!        v
//!   401/403  --> NetworkError::Authentication
//!   other    --> NetworkError::HttpError
//!   bad body --> NetworkError::Decode
//!
//! Global client: OnceLock, connection pool, keep-alive
//! ```
//!
//! URLs that end up in errors or logs pass through [`redact_url`] first.

use std::sync::OnceLock;

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{NetworkError, TxResult};

/// Global HTTP client - initialized once, reused across all requests.
/// Falls back to a basic client if custom configuration fails.
fn global_client() -> &'static Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent(format!("txsync/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

/// Removes any `user:password@` part from a URL for display.
///
/// Strings that do not parse as URLs are returned unchanged.
#[must_use]
pub fn redact_url(url: &str) -> String {
    match Url::parse(url) {
        Ok(mut parsed) if !parsed.username().is_empty() || parsed.password().is_some() => {
            let _ = parsed.set_username("");
            let _ = parsed.set_password(None);
            parsed.to_string()
        }
        _ => url.to_string(),
    }
}

/// A single GET request against the backend API.
///
/// # Example
/// ```ignore
/// use txsync::net::ApiRequest;
///
/// let stats: serde_json::Value = ApiRequest::new()
///     .url("https://www.transifex.com/api/2/project/Demo/resource/app/stats/")
///     .basic_auth("user", "password")
///     .fetch_json()
///     .await?;
/// ```
pub struct ApiRequest {
    client: Client,
    url: Option<String>,
    auth: Option<(String, String)>,
    headers: Vec<(String, String)>,
}

impl Default for ApiRequest {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiRequest {
    /// Create a new request using the shared client.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: global_client().clone(),
            url: None,
            auth: None,
            headers: Vec::new(),
        }
    }

    /// Set the URL to request.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Authenticate with HTTP basic auth.
    #[must_use]
    pub fn basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.auth = Some((username.into(), password.into()));
        self
    }

    /// Add a custom header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Send the request and deserialize the JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No URL is configured or the URL is invalid.
    /// - The request fails or returns a non-success status code.
    /// - The body is not JSON of the expected shape.
    pub async fn fetch_json<T: DeserializeOwned>(&self) -> TxResult<T> {
        let (url, body) = self.send().await?;
        serde_json::from_str(&body).map_err(|e| {
            NetworkError::Decode {
                url,
                message: e.to_string(),
            }
            .into()
        })
    }

    async fn send(&self) -> TxResult<(String, String)> {
        let raw = self
            .url
            .as_deref()
            .ok_or_else(|| NetworkError::InvalidUrl("no URL provided".to_string()))?;
        let shown = redact_url(raw);
        let url = Url::parse(raw).map_err(|e| NetworkError::InvalidUrl(format!("{e}: {shown}")))?;

        let mut request = self.client.get(url);
        if let Some((username, password)) = &self.auth {
            request = request.basic_auth(username, Some(password));
        }
        for (name, value) in &self.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        debug!(url = %shown, "GET");
        let response = request
            .send()
            .await
            .map_err(|e| NetworkError::Reqwest(e.without_url()))?;

        let status = response.status();
        if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            return Err(NetworkError::Authentication {
                status: status.as_u16(),
                url: shown,
            }
            .into());
        }
        if !status.is_success() {
            return Err(NetworkError::HttpError {
                status: status.as_u16(),
                url: shown,
            }
            .into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| NetworkError::Reqwest(e.without_url()))?;
        Ok((shown, body))
    }
}

