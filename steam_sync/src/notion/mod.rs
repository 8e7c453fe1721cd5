//! Notion API client for the games database.
//!
//! Covers the handful of endpoints the sync needs: database search, create
//! and schema update, row lookup by `ID`, page create and page update.

mod databases;
mod pages;
mod schema;

pub use schema::{database_properties, page_properties, ColumnType, DATABASE_SCHEMA};

use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::{Config, DEFAULT_NOTION_API_URL};
use crate::error::{Result, SyncError};

/// API version pinned in every request
pub const NOTION_VERSION: &str = "2022-06-28";

/// Notion API client authenticated with an integration token.
pub struct NotionApi {
    pub(crate) client: Client,
    pub(crate) token: String,
    pub(crate) base_url: String,
}

/// Any Notion object; only the id is needed.
#[derive(Debug, Deserialize)]
pub(crate) struct ObjectRef {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl NotionApi {
    pub fn new(client: Client, token: String) -> Self {
        log::debug!("Creating Notion API client (token length: {})", token.len());
        Self {
            client,
            token,
            base_url: DEFAULT_NOTION_API_URL.to_string(),
        }
    }

    pub fn from_config(client: Client, config: &Config) -> Self {
        let mut api = Self::new(client, config.notion_token.clone());
        api.base_url = config.notion_api_url.clone();
        api
    }

    /// Send a JSON request to `/v1/{path}` and decode the response.
    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T> {
        let url = format!("{}/v1/{}", self.base_url, path);
        log::debug!("{} {}", method, url);

        let response = self
            .client
            .request(method, &url)
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            log::error!("Notion request to {} failed with status {}: {}", path, status, text);
            return Err(SyncError::Api { status, body: text });
        }

        log::debug!("Response body: {}", text);
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
