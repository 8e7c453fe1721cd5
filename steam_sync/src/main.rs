//! Steam Sync - Steam library to Notion database
//!
//! Runs a single sync and exits. Credentials are read from the environment
//! (or a `.env` file): NOTION_TOKEN, PAGE_ID, STEAM_ACCOUNT_ID, STEAM_KEY.

use clap::Parser;
use std::time::Duration;
use steam_sync::config::timeout_from_secs;
use steam_sync::{Config, FailurePolicy, Result, SyncJob, SyncReport};

/// Sync a Steam library into a Notion database
#[derive(Parser, Debug)]
#[command(name = "steam_sync")]
#[command(version, about, long_about = None)]
struct Args {
    /// What to do when a single game fails to sync (overrides ON_ERROR)
    #[arg(long, value_enum)]
    on_error: Option<FailurePolicy>,

    /// Seconds to wait between database setup and row sync (overrides SYNC_DELAY_SECS)
    #[arg(long)]
    delay_secs: Option<u64>,

    /// Per-request timeout in seconds, 0 disables (overrides REQUEST_TIMEOUT_SECS)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Title of the Notion database (overrides DATABASE_TITLE)
    #[arg(long)]
    database_title: Option<String>,
}

impl Args {
    fn apply(self, config: &mut Config) {
        if let Some(policy) = self.on_error {
            config.failure_policy = policy;
        }
        if let Some(secs) = self.delay_secs {
            config.sync_delay = Duration::from_secs(secs);
        }
        if let Some(secs) = self.timeout_secs {
            config.request_timeout = timeout_from_secs(secs);
        }
        if let Some(title) = self.database_title {
            config.database_title = title;
        }
    }
}

/// Load configuration, then run one sync.
async fn run(args: Args) -> Result<SyncReport> {
    let mut config = Config::from_env()?;
    args.apply(&mut config);
    log::debug!("Configuration: {:?}", config);
    log::info!(
        "Target database: '{}' (on error: {:?})",
        config.database_title,
        config.failure_policy
    );

    SyncJob::new(config)?.run().await
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    log::info!("Starting steam_sync...");

    match run(args).await {
        Ok(report) if report.failed > 0 => {
            log::warn!("{} game(s) were skipped, see errors above", report.failed);
        }
        Ok(_) => {}
        Err(e) => {
            log::error!("Sync failed: {}", e);
            std::process::exit(1);
        }
    }
}
