//! Client configuration for the remote hero collection.
//!
//! # Responsibility
//! - Resolve the collection URL from explicit values or environment.
//! - Reject URLs the HTTP transport cannot address.
//!
//! # Invariants
//! - `collection_url` never ends with `/`.
//! - Only `http` and `https` schemes are accepted.

use std::error::Error;
use std::fmt::{Display, Formatter};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_RESOURCE_PATH: &str = "api/heroes";
pub const BASE_URL_ENV: &str = "HEROES_API_URL";
pub const RESOURCE_PATH_ENV: &str = "HEROES_API_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidUrl { value: String, message: String },
    UnsupportedScheme(String),
    EmptyResourcePath,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidUrl { value, message } => {
                write!(f, "invalid base url `{value}`: {message}")
            }
            Self::UnsupportedScheme(scheme) => {
                write!(f, "unsupported url scheme `{scheme}`; expected http|https")
            }
            Self::EmptyResourcePath => write!(f, "resource path cannot be empty"),
        }
    }
}

impl Error for ConfigError {}

/// Where the hero collection lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroClientConfig {
    collection_url: String,
}

impl HeroClientConfig {
    /// Builds a config from a base URL and a resource path such as `api/heroes`.
    ///
    /// # Errors
    /// - Returns an error when `base_url` does not parse or is not http(s).
    /// - Returns an error when `resource_path` is blank.
    pub fn new(base_url: &str, resource_path: &str) -> Result<Self, ConfigError> {
        let trimmed_base = base_url.trim();
        let parsed = Url::parse(trimmed_base).map_err(|err| ConfigError::InvalidUrl {
            value: trimmed_base.to_string(),
            message: err.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(parsed.scheme().to_string()));
        }

        let path = resource_path.trim().trim_matches('/');
        if path.is_empty() {
            return Err(ConfigError::EmptyResourcePath);
        }

        let base = parsed.as_str().trim_end_matches('/');
        Ok(Self {
            collection_url: format!("{base}/{path}"),
        })
    }

    /// Reads `HEROES_API_URL` and `HEROES_API_PATH`, falling back to defaults
    /// for unset or blank values.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base = env_or_default(BASE_URL_ENV, DEFAULT_BASE_URL);
        let path = env_or_default(RESOURCE_PATH_ENV, DEFAULT_RESOURCE_PATH);
        Self::new(&base, &path)
    }

    /// `<base>`: target of list, create and update.
    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }

    /// `<base>/<id>`: target of get and delete.
    pub fn item_url(&self, id: i64) -> String {
        format!("{}/{id}", self.collection_url)
    }

    /// `<base>/`: target of name searches, with the term passed as `?name=`.
    pub fn search_url(&self) -> String {
        format!("{}/", self.collection_url)
    }
}

impl Default for HeroClientConfig {
    fn default() -> Self {
        Self {
            collection_url: format!("{DEFAULT_BASE_URL}/{DEFAULT_RESOURCE_PATH}"),
        }
    }
}

fn env_or_default(key: &str, default: &str) -> String {
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw.trim().to_string(),
        _ => default.to_string(),
    }
}
