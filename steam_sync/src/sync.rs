//! Sync orchestration: Steam library in, Notion rows out.

use std::fmt;

use reqwest::Client;

use crate::config::{Config, FailurePolicy};
use crate::error::Result;
use crate::notion::NotionApi;
use crate::record::{icon_url, GameRecord};
use crate::steam::{OwnedGame, SteamApi};

const USER_AGENT: &str = "steam_sync/1.0";

/// What happened to a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    Created,
    Updated,
}

/// Counters for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub total: usize,
    pub created: usize,
    pub updated: usize,
    /// Games skipped after an error (only with [`FailurePolicy::Skip`])
    pub failed: usize,
}

impl fmt::Display for SyncReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games: {} created, {} updated, {} failed",
            self.total, self.created, self.updated, self.failed
        )
    }
}

/// One sync run over the configured account and database.
pub struct SyncJob {
    config: Config,
    steam: SteamApi,
    notion: NotionApi,
}

impl SyncJob {
    /// Build the shared HTTP client and both API clients.
    pub fn new(config: Config) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            steam: SteamApi::from_config(client.clone(), &config),
            notion: NotionApi::from_config(client, &config),
            config,
        })
    }

    /// Run the full sync. Games are processed one at a time, in library order.
    pub async fn run(&self) -> Result<SyncReport> {
        let database_id = self.ensure_database().await?;
        let games = self.steam.owned_games().await?;

        if !self.config.sync_delay.is_zero() {
            log::info!(
                "Waiting {}s for Notion to index the database...",
                self.config.sync_delay.as_secs()
            );
            tokio::time::sleep(self.config.sync_delay).await;
        }

        let mut report = SyncReport {
            total: games.len(),
            ..SyncReport::default()
        };

        for (index, game) in games.iter().enumerate() {
            log::info!(
                "[{}/{}] Processing {} ({})",
                index + 1,
                games.len(),
                game.name,
                game.appid
            );

            match self.sync_game(&database_id, game).await {
                Ok(SyncOutcome::Created) => report.created += 1,
                Ok(SyncOutcome::Updated) => report.updated += 1,
                Err(e) => match self.config.failure_policy {
                    FailurePolicy::Abort => {
                        log::error!("Failed to sync {} ({}): {}", game.name, game.appid, e);
                        return Err(e);
                    }
                    FailurePolicy::Skip => {
                        log::warn!("Skipping {} ({}): {}", game.name, game.appid, e);
                        report.failed += 1;
                    }
                },
            }
        }

        log::info!("Sync completed: {}", report);
        Ok(report)
    }

    /// Make sure the games database exists with the current schema.
    pub async fn ensure_database(&self) -> Result<String> {
        self.notion
            .ensure_database(&self.config.parent_page_id, &self.config.database_title)
            .await
    }

    /// Upsert the row for one game, keyed by its appid.
    pub async fn sync_game(&self, database_id: &str, game: &OwnedGame) -> Result<SyncOutcome> {
        let id = game.appid.to_string();
        let existing = self.notion.find_page(database_id, &id).await?;

        let details = self.steam.app_details(game.appid).await;
        let achievements = self.steam.achievement_progress(game.appid).await?;
        let record = GameRecord::build(game, details.as_ref(), achievements);

        match existing {
            Some(page_id) => {
                self.notion.update_page(&page_id, &record).await?;
                log::info!("Updated {} ({})", record.name, record.id);
                Ok(SyncOutcome::Updated)
            }
            None => {
                let icon = icon_url(game.appid, &game.img_icon_url);
                let page_id = self
                    .notion
                    .create_page(database_id, &record, icon.as_deref())
                    .await?;
                log::info!("Created {} ({}) as page {}", record.name, record.id, page_id);
                Ok(SyncOutcome::Created)
            }
        }
    }
}
