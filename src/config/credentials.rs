// txsync: Transifex translation sync tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Backend credentials.
//!
//! ```text
//! locate_in(explicit, cwd, exe_dir)
//!   1. explicit path, if it exists
//!   2. <cwd>/transifex_conf.json
//!   3. <exe_dir>/transifex_conf.json
//!        |
//!        v
//!   load() --> Credentials { username, password }
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ConfigError, TxResult};
use crate::utility::fs::read_text;

/// File name searched for in the current and executable directories.
pub const DEFAULT_CREDENTIALS_FILENAME: &str = "transifex_conf.json";

/// Username and password for the backend's basic authentication.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[hidden]")
            .finish()
    }
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Parses the JSON credentials document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CredentialsInvalid`] if the JSON is malformed or
    /// either field is empty.
    pub fn parse(path: &Path, content: &str) -> Result<Self, ConfigError> {
        let invalid = |message: String| ConfigError::CredentialsInvalid {
            path: path.display().to_string(),
            message,
        };

        let credentials: Self = serde_json::from_str(content).map_err(|e| invalid(e.to_string()))?;
        if credentials.username.trim().is_empty() || credentials.password.is_empty() {
            return Err(invalid("username and password must not be empty".to_string()));
        }
        Ok(credentials)
    }

    /// Reads credentials from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid.
    pub fn load(path: &Path) -> TxResult<Self> {
        let content = read_text(path)?;
        Ok(Self::parse(path, &content)?)
    }

    /// Finds the credentials file and loads it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CredentialsNotFound`] when no candidate exists,
    /// or the load error of the first existing candidate.
    pub fn discover(explicit: Option<&Path>) -> TxResult<Self> {
        let cwd = std::env::current_dir().ok();
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        let path = locate_in(explicit, cwd.as_deref(), exe_dir.as_deref())?;
        Self::load(&path)
    }
}

/// Returns the first existing credentials file among the candidates.
///
/// # Errors
///
/// Returns [`ConfigError::CredentialsNotFound`] listing every searched path.
pub fn locate_in(
    explicit: Option<&Path>,
    cwd: Option<&Path>,
    exe_dir: Option<&Path>,
) -> Result<PathBuf, ConfigError> {
    let candidates: Vec<PathBuf> = explicit
        .map(Path::to_path_buf)
        .into_iter()
        .chain(cwd.map(|dir| dir.join(DEFAULT_CREDENTIALS_FILENAME)))
        .chain(exe_dir.map(|dir| dir.join(DEFAULT_CREDENTIALS_FILENAME)))
        .collect();

    if let Some(found) = candidates.iter().find(|p| p.is_file()) {
        return Ok(found.clone());
    }

    Err(ConfigError::CredentialsNotFound {
        searched: candidates
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", "),
    })
}
