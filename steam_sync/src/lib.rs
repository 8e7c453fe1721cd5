//! Steam Sync - Steam library to Notion database
//!
//! Mirrors the games owned by a Steam account into a Notion database, one
//! row per game, with genres, categories, developers and achievement
//! progress. Rows are keyed by appid and updated in place on later runs.

pub mod config;
pub mod error;
pub mod notion;
pub mod record;
pub mod steam;
pub mod sync;

pub use config::{Config, FailurePolicy};
pub use error::{ConfigError, Result, SyncError};
pub use record::GameRecord;
pub use sync::{SyncJob, SyncOutcome, SyncReport};
