//! Steam Web API and storefront clients.
//!
//! Three read-only sources feed the sync: the owned games list of the
//! tracked account, per-app store details, and per-app achievement progress.

mod achievements;
mod library;
mod store;

pub use achievements::Achievement;
pub use library::OwnedGame;
pub use store::{AppDetails, Tag};

use reqwest::Client;

use crate::config::{Config, DEFAULT_STEAM_API_URL, DEFAULT_STEAM_STORE_URL};

/// Steam client bound to one account and API key.
pub struct SteamApi {
    pub(crate) client: Client,
    pub(crate) api_key: String,
    pub(crate) account_id: String,
    pub(crate) api_url: String,
    pub(crate) store_url: String,
}

impl SteamApi {
    /// Creates a Steam client against the public endpoints.
    pub fn new(client: Client, api_key: String, account_id: String) -> Self {
        log::debug!("Creating Steam API client for account {}", account_id);
        Self {
            client,
            api_key,
            account_id,
            api_url: DEFAULT_STEAM_API_URL.to_string(),
            store_url: DEFAULT_STEAM_STORE_URL.to_string(),
        }
    }

    pub fn from_config(client: Client, config: &Config) -> Self {
        let mut api = Self::new(
            client,
            config.steam_api_key.clone(),
            config.steam_account_id.clone(),
        );
        api.api_url = config.steam_api_url.clone();
        api.store_url = config.steam_store_url.clone();
        api
    }
}
