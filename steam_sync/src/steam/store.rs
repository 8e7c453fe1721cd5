//! Storefront app details (genres, categories, developers).

use std::collections::HashMap;

use serde::Deserialize;

use super::SteamApi;
use crate::error::{Result, SyncError};

/// Store metadata for one app. Lists default to empty when Steam omits them.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppDetails {
    #[serde(default)]
    pub steam_appid: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub genres: Vec<Tag>,
    #[serde(default)]
    pub categories: Vec<Tag>,
    #[serde(default)]
    pub developers: Vec<String>,
    #[serde(default)]
    pub publishers: Vec<String>,
}

/// Genre or category entry. Only the description is used.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Tag {
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
struct AppDetailsEntry {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<AppDetails>,
}

impl SteamApi {
    /// Store details for `appid`, or `None` if they cannot be fetched.
    ///
    /// Failures are logged and swallowed: a game without store details is
    /// still synced, just with empty genre/category/developer lists.
    pub async fn app_details(&self, appid: u64) -> Option<AppDetails> {
        match self.fetch_app_details(appid).await {
            Ok(Some(details)) => Some(details),
            Ok(None) => {
                log::warn!("No store details available for app {}", appid);
                None
            }
            Err(e) => {
                log::warn!("Failed to fetch store details for app {}: {}", appid, e);
                None
            }
        }
    }

    pub async fn fetch_app_details(&self, appid: u64) -> Result<Option<AppDetails>> {
        let url = format!("{}/api/appdetails", self.store_url);
        log::debug!("GET {}?appids={}", url, appid);

        let response = self
            .client
            .get(&url)
            .query(&[("appids", appid.to_string())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SyncError::HttpStatus(response.status()));
        }

        let body = response.text().await?;
        let mut entries: HashMap<String, AppDetailsEntry> = serde_json::from_str(&body)?;

        Ok(entries
            .remove(&appid.to_string())
            .filter(|entry| entry.success)
            .and_then(|entry| entry.data))
    }
}
