//! Credential resolution.
//!
//! Credentials come from flags first, then from a JSON file at
//! `$XDG_CONFIG_HOME/pypig/auth.json` if it exists, else `~/.config/pypig/auth.json`:
//!
//! ```json
//! {
//!     "index": "https://<repository-url>.com/",
//!     "username": "u",
//!     "password": "p"
//! }
//! ```
//!
//! The file is only read when a flag is missing, and only fills unset values.

use pypig_index::{IndexUrl, UrlError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{missing} must be set by flags (--index, -u, -p) or in {path}")]
    MissingCredentials { missing: String, path: String },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid credentials file {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Url(#[from] UrlError),
}

/// Possibly incomplete credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub index: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Credentials with every field present.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedCredentials {
    pub index: String,
    pub username: String,
    pub password: String,
}

impl ResolvedCredentials {
    /// Compose the credential-bearing index URL.
    pub fn index_url(&self) -> Result<IndexUrl, ConfigError> {
        Ok(IndexUrl::compose(
            &self.index,
            &self.username,
            &self.password,
        )?)
    }
}

impl std::fmt::Debug for ResolvedCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedCredentials")
            .field("index", &self.index)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl Credentials {
    /// Default credentials file location.
    pub fn default_path() -> Option<PathBuf> {
        Self::locate(
            std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
            dirs::home_dir(),
        )
    }

    /// `$XDG_CONFIG_HOME/pypig/auth.json` when that file exists, otherwise
    /// `~/.config/pypig/auth.json`.
    fn locate(config_home: Option<PathBuf>, home: Option<PathBuf>) -> Option<PathBuf> {
        let auth_file = |dir: PathBuf| dir.join("pypig").join("auth.json");
        let xdg = config_home
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(auth_file);
        let fallback = home.map(|home| auth_file(home.join(".config")));
        match xdg {
            Some(path) if path.exists() => Some(path),
            xdg => fallback.or(xdg),
        }
    }

    /// Load credentials from a JSON file. Unknown keys are ignored.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn is_complete(&self) -> bool {
        self.index.is_some() && self.username.is_some() && self.password.is_some()
    }

    /// Fill unset fields from `other`; set fields are kept.
    pub fn fill_from(self, other: Credentials) -> Self {
        Self {
            index: self.index.or(other.index),
            username: self.username.or(other.username),
            password: self.password.or(other.password),
        }
    }

    /// Complete these credentials, consulting `file` only if something is unset.
    pub fn resolve(self, file: Option<&Path>) -> Result<ResolvedCredentials, ConfigError> {
        let creds = match file {
            Some(path) if !self.is_complete() && path.exists() => {
                tracing::debug!(path = %path.display(), "loading credentials file");
                self.fill_from(Self::load_file(path)?)
            }
            _ => self,
        };

        match creds {
            Credentials {
                index: Some(index),
                username: Some(username),
                password: Some(password),
            } => Ok(ResolvedCredentials {
                index,
                username,
                password,
            }),
            creds => Err(ConfigError::MissingCredentials {
                missing: creds.missing().join(", "),
                path: file
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "~/.config/pypig/auth.json".to_string()),
            }),
        }
    }

    fn missing(&self) -> Vec<&'static str> {
        [
            ("index", self.index.is_none()),
            ("username", self.username.is_none()),
            ("password", self.password.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, unset)| unset.then_some(name))
        .collect()
    }
}
