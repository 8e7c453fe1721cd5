//! Mapping from Steam data to the row stored in Notion.

use crate::steam::{Achievement, AppDetails, OwnedGame};

const ICON_BASE_URL: &str = "https://media.steampowered.com/steamcommunity/public/images/apps";

/// One database row, keyed by `id` (the appid as a string).
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub id: String,
    pub name: String,
    pub genres: Vec<String>,
    pub categories: Vec<String>,
    pub developers: Vec<String>,
    /// Fraction of achievements unlocked, 0.0..=1.0
    pub achievements: f64,
}

impl GameRecord {
    /// Build the row for `game`. Missing details leave the list columns empty.
    pub fn build(game: &OwnedGame, details: Option<&AppDetails>, achievements: f64) -> Self {
        let (genres, categories, developers) = match details {
            Some(d) => (
                sanitize_all(d.genres.iter().map(|g| g.description.as_str())),
                sanitize_all(d.categories.iter().map(|c| c.description.as_str())),
                sanitize_all(d.developers.iter().map(String::as_str)),
            ),
            None => (Vec::new(), Vec::new(), Vec::new()),
        };

        Self {
            id: game.appid.to_string(),
            name: game.name.clone(),
            genres,
            categories,
            developers,
            achievements,
        }
    }
}

/// Make a value safe for a Notion multi-select.
///
/// Notion splits multi-select option names on commas, so each comma becomes
/// a space and whitespace runs are collapsed. The value is never split.
pub fn sanitize_option(value: &str) -> String {
    value
        .replace(',', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sanitize a multi-select list. Blank values are dropped and duplicates
/// collapsed, Notion rejects both.
fn sanitize_all<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    for option in values.map(sanitize_option) {
        if !option.is_empty() && !options.contains(&option) {
            options.push(option);
        }
    }
    options
}

/// Share of `achievements` that are unlocked, rounded to two decimals.
///
/// Returns 0.0 when the app defines no achievements.
pub fn achievement_fraction(achievements: &[Achievement]) -> f64 {
    if achievements.is_empty() {
        return 0.0;
    }
    let achieved = achievements.iter().filter(|a| a.is_achieved()).count();
    let fraction = achieved as f64 / achievements.len() as f64;
    (fraction * 100.0).round() / 100.0
}

/// Community icon URL for an app, `None` if Steam gave no icon hash.
pub fn icon_url(appid: u64, icon_hash: &str) -> Option<String> {
    if icon_hash.trim().is_empty() {
        return None;
    }
    Some(format!("{}/{}/{}.jpg", ICON_BASE_URL, appid, icon_hash))
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
