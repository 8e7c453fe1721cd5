//! Per-app achievement progress for the tracked account.

use serde::Deserialize;

use super::SteamApi;
use crate::error::{Result, SyncError};
use crate::record::achievement_fraction;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Achievement {
    pub apiname: String,
    /// 1 if unlocked, 0 otherwise
    pub achieved: u8,
    #[serde(default)]
    pub unlocktime: u64,
}

impl Achievement {
    pub fn is_achieved(&self) -> bool {
        self.achieved == 1
    }
}

#[derive(Debug, Deserialize)]
struct PlayerStatsEnvelope {
    playerstats: PlayerStats,
}

#[derive(Debug, Deserialize, Default)]
struct PlayerStats {
    #[serde(default)]
    achievements: Vec<Achievement>,
    #[serde(default)]
    error: Option<String>,
}

impl SteamApi {
    /// Achievements defined for `appid`, with the account's unlock state.
    ///
    /// Apps without stats come back as HTTP 400 carrying a `playerstats`
    /// error; those yield an empty list rather than an error.
    pub async fn achievements(&self, appid: u64) -> Result<Vec<Achievement>> {
        let url = format!(
            "{}/ISteamUserStats/GetPlayerAchievements/v0001/",
            self.api_url
        );
        log::debug!("GET {}?appid={}", url, appid);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("appid", appid.to_string()),
                ("key", self.api_key.clone()),
                ("steamid", self.account_id.clone()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<PlayerStatsEnvelope>(&body) {
            Ok(envelope) => {
                if let Some(error) = envelope.playerstats.error {
                    log::debug!("No achievement stats for app {}: {}", appid, error);
                }
                Ok(envelope.playerstats.achievements)
            }
            Err(e) if status.is_success() => Err(SyncError::Parse(e)),
            Err(_) => Err(SyncError::HttpStatus(status)),
        }
    }

    /// Completed share of the app's achievements, rounded to two decimals.
    pub async fn achievement_progress(&self, appid: u64) -> Result<f64> {
        let achievements = self.achievements(appid).await?;
        Ok(achievement_fraction(&achievements))
    }
}
