//! Host configuration parsed from environment variables.
//!
//! Every value has a default, so an empty environment yields a working dev
//! server. Malformed values are rejected rather than silently defaulted.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("invalid boolean for {key}: {value:?} (expected 1/0, true/false, yes/no, on/off)")]
    InvalidBool { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Overrides the Leptos site root used to serve `/pkg`.
    pub site_root: Option<PathBuf>,
    /// Redirect `/app` page loads without a `token` cookie to `/login`.
    pub require_session_cookie: bool,
}

impl Config {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CALF_SITE_ROOT`: default is the Leptos `site_root`
    /// - `CALF_REQUIRE_SESSION_COOKIE`: default true
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when `PORT` is not a port number or the cookie
    /// flag is not a recognized boolean.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value: raw.clone(), source })?,
            None => DEFAULT_PORT,
        };

        let site_root = lookup("CALF_SITE_ROOT")
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        let key = "CALF_REQUIRE_SESSION_COOKIE";
        let require_session_cookie = match lookup(key) {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidBool { key, value: raw })?,
            None => true,
        };

        Ok(Self { port, site_root, require_session_cookie })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
