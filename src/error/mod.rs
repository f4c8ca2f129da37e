// txsync: Transifex translation sync tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!               TxError (16 bytes)
//!                     |
//!   +--------+--------+--------+--------+------+
//!   |        |        |        |        |      |
//!   v        v        v        v        v      v
//! Network  Config   Parse     Fs    Pipeline   Io
//!   Box     Box      Box      Box     Box     Box
//!
//! Sub-errors (unboxed internally):
//!   Network   Authentication, HttpError, Reqwest, InvalidUrl, Decode
//!   Config    CredentialsNotFound, CredentialsInvalid, MissingKey, InvalidValue
//!   Parse     Strings, DuplicateKey, Yaml, MissingLanguage
//!   Fs        NotFound, PermissionDenied, IoError
//!   Pipeline  Interrupted, UnknownResource
//!
//! Parse errors are downgraded to warnings inside the merge engine.
//! Network and Config errors abort the run.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`TxError`].
pub type TxResult<T> = std::result::Result<T, TxError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum TxError {
    /// Backend request failed.
    #[error("network error: {0}")]
    Network(#[from] Box<NetworkError>),

    /// Configuration or credentials error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Malformed string table or YAML document.
    #[error("parse error: {0}")]
    Parse(#[from] Box<ParseError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// Resource pipeline error.
    #[error("pipeline error: {0}")]
    Pipeline(#[from] Box<PipelineError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for TxError {
                fn from(err: $error) -> Self {
                    TxError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    NetworkError => Network,
    ConfigError => Config,
    ParseError => Parse,
    FsError => Fs,
    PipelineError => Pipeline,
    std::io::Error => Io,
}

// --- Network Errors ---

/// Backend request errors.
///
/// URLs carried here never contain credentials.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// The backend rejected the credentials.
    #[error("authentication failed with code {status}: {url}")]
    Authentication { status: u16, url: String },

    /// Non-success HTTP response.
    #[error("request failed with code {status}: {url}")]
    HttpError { status: u16, url: String },

    /// Error from reqwest library.
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Invalid URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// Response body did not have the expected shape.
    #[error("unexpected response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl NetworkError {
    /// HTTP status code of the failed response, if there was one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication { status, .. } | Self::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No credentials file in any of the searched locations.
    #[error("unable to find credentials file (searched: {searched})")]
    CredentialsNotFound { searched: String },

    /// Credentials file exists but could not be used.
    #[error("unable to load credentials from '{path}': {message}")]
    CredentialsInvalid { path: String, message: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Parse Errors ---

/// Errors from the string table and YAML parsers.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Text that is not a comment or a `"key" = "value";` entry.
    #[error("malformed string table at line {line}: {fragment:?}")]
    Strings { line: usize, fragment: String },

    /// The same key appears twice in one string table.
    #[error("duplicate key {key:?} at line {line}")]
    DuplicateKey { line: usize, key: String },

    /// Invalid YAML.
    #[error("malformed yaml document: {message}")]
    Yaml { message: String },

    /// Document lacks the expected top-level language key.
    #[error("document has no '{lang}' language key")]
    MissingLanguage { lang: String },
}

impl From<serde_yaml::Error> for ParseError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml {
            message: err.to_string(),
        }
    }
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// Permission denied.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Classifies an I/O error for the given path.
    #[must_use]
    pub fn from_io(path: &std::path::Path, source: std::io::Error) -> Self {
        let display = path.display().to_string();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(display),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(display),
            _ => Self::IoError {
                path: display,
                source,
            },
        }
    }
}

// --- Pipeline Errors ---

/// Resource pipeline errors.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Run was cancelled before the resource finished.
    #[error("resource '{0}' was interrupted")]
    Interrupted(String),

    /// No resource with this name is configured.
    #[error("resource '{0}' is not configured")]
    UnknownResource(String),
}

#[cfg(test)]
mod tests;
