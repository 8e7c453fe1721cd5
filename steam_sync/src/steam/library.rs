//! Owned games of the tracked account.

use serde::Deserialize;

use super::SteamApi;
use crate::error::{Result, SyncError};

/// One game in the account's library, as returned with `include_appinfo=1`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OwnedGame {
    pub appid: u64,
    pub name: String,
    /// Icon hash, combined with the appid to build the icon URL
    #[serde(default)]
    pub img_icon_url: String,
    /// Total playtime in minutes
    #[serde(default)]
    pub playtime_forever: u64,
    #[serde(default)]
    pub playtime_2weeks: Option<u64>,
    /// Unix timestamp, 0 if never played
    #[serde(default)]
    pub rtime_last_played: u64,
    #[serde(default)]
    pub has_community_visible_stats: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct OwnedGamesEnvelope {
    response: OwnedGamesResponse,
}

// Private profiles answer with an empty `response` object.
#[derive(Debug, Deserialize, Default)]
struct OwnedGamesResponse {
    #[serde(default)]
    game_count: usize,
    #[serde(default)]
    games: Vec<OwnedGame>,
}

impl SteamApi {
    /// Fetch every game owned by the configured account.
    pub async fn owned_games(&self) -> Result<Vec<OwnedGame>> {
        let url = format!("{}/IPlayerService/GetOwnedGames/v0001/", self.api_url);
        log::info!("Fetching owned games for account {}...", self.account_id);
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("steamid", self.account_id.as_str()),
                ("key", self.api_key.as_str()),
                ("include_appinfo", "1"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SyncError::HttpStatus(response.status()));
        }

        let body = response.text().await?;
        let envelope: OwnedGamesEnvelope = serde_json::from_str(&body)?;
        let games = envelope.response.games;

        if games.is_empty() {
            log::warn!(
                "Steam returned no games for account {} (is the profile public?)",
                self.account_id
            );
        } else {
            log::info!(
                "Fetched {} owned games (reported count: {})",
                games.len(),
                envelope.response.game_count
            );
        }

        Ok(games)
    }
}
