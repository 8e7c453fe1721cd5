//! Runtime configuration, read once at startup.
//!
//! Credentials come from the process environment (a `.env` file in the
//! working directory is loaded first when present). The resulting [`Config`]
//! is immutable and handed to [`crate::sync::SyncJob`].

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

/// Title of the Notion database the library is mirrored into
pub const DEFAULT_DATABASE_TITLE: &str = "Steam Videojuegos";
pub const DEFAULT_STEAM_API_URL: &str = "https://api.steampowered.com";
pub const DEFAULT_STEAM_STORE_URL: &str = "https://store.steampowered.com";
pub const DEFAULT_NOTION_API_URL: &str = "https://api.notion.com";

/// Pause between database setup and row sync, lets Notion index a fresh database
pub const DEFAULT_SYNC_DELAY: Duration = Duration::from_secs(5);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// What to do when a single game fails to sync
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FailurePolicy {
    /// Stop the run at the first failing game
    #[default]
    Abort,
    /// Log the failure and continue with the next game
    Skip,
}

impl FromStr for FailurePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(FailurePolicy::Abort),
            "skip" => Ok(FailurePolicy::Skip),
            _ => Err(ConfigError::Invalid {
                key: "ON_ERROR",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Clone)]
pub struct Config {
    pub notion_token: String,
    /// Notion page the database is created under
    pub parent_page_id: String,
    /// 64-bit SteamID of the tracked account
    pub steam_account_id: String,
    pub steam_api_key: String,
    pub database_title: String,
    pub sync_delay: Duration,
    /// `None` disables the per-request timeout
    pub request_timeout: Option<Duration>,
    pub failure_policy: FailurePolicy,
    pub steam_api_url: String,
    pub steam_store_url: String,
    pub notion_api_url: String,
}

impl Config {
    /// Load configuration from the environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenv::dotenv() {
            Ok(path) => log::debug!("Loaded environment from {}", path.display()),
            Err(e) => log::debug!("No .env file loaded: {}", e),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let notion_token = required("NOTION_TOKEN")?;
        let parent_page_id = required("PAGE_ID")?;
        let steam_account_id = required("STEAM_ACCOUNT_ID")?;
        let steam_api_key = required("STEAM_KEY")?;

        let sync_delay = match get("SYNC_DELAY_SECS") {
            Some(raw) => Duration::from_secs(parse_secs("SYNC_DELAY_SECS", &raw)?),
            None => DEFAULT_SYNC_DELAY,
        };
        let request_timeout = match get("REQUEST_TIMEOUT_SECS") {
            Some(raw) => timeout_from_secs(parse_secs("REQUEST_TIMEOUT_SECS", &raw)?),
            None => Some(DEFAULT_REQUEST_TIMEOUT),
        };
        let failure_policy = match get("ON_ERROR") {
            Some(raw) => raw.parse()?,
            None => FailurePolicy::default(),
        };

        Ok(Self {
            notion_token,
            parent_page_id,
            steam_account_id,
            steam_api_key,
            database_title: get("DATABASE_TITLE")
                .unwrap_or_else(|| DEFAULT_DATABASE_TITLE.to_string()),
            sync_delay,
            request_timeout,
            failure_policy,
            steam_api_url: base_url(get("STEAM_API_URL"), DEFAULT_STEAM_API_URL),
            steam_store_url: base_url(get("STEAM_STORE_URL"), DEFAULT_STEAM_STORE_URL),
            notion_api_url: base_url(get("NOTION_API_URL"), DEFAULT_NOTION_API_URL),
        })
    }
}

/// A timeout of zero seconds means "no timeout".
pub fn timeout_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

fn parse_secs(key: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.parse::<u64>().map_err(|_| ConfigError::Invalid {
        key,
        value: raw.to_string(),
    })
}

fn base_url(value: Option<String>, default: &str) -> String {
    value
        .unwrap_or_else(|| default.to_string())
        .trim_end_matches('/')
        .to_string()
}

// Credentials stay out of debug logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("notion_token", &"<redacted>")
            .field("parent_page_id", &self.parent_page_id)
            .field("steam_account_id", &self.steam_account_id)
            .field("steam_api_key", &"<redacted>")
            .field("database_title", &self.database_title)
            .field("sync_delay", &self.sync_delay)
            .field("request_timeout", &self.request_timeout)
            .field("failure_policy", &self.failure_policy)
            .field("steam_api_url", &self.steam_api_url)
            .field("steam_store_url", &self.steam_store_url)
            .field("notion_api_url", &self.notion_api_url)
            .finish()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
