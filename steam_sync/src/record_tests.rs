//! Tests for the record mapper

use crate::record::{achievement_fraction, icon_url, sanitize_option, GameRecord};
use crate::steam::{Achievement, AppDetails, OwnedGame, Tag};

fn game(appid: u64, name: &str, icon: &str) -> OwnedGame {
    OwnedGame {
        appid,
        name: name.to_string(),
        img_icon_url: icon.to_string(),
        playtime_forever: 120,
        playtime_2weeks: None,
        rtime_last_played: 0,
        has_community_visible_stats: Some(true),
    }
}

fn tags(values: &[&str]) -> Vec<Tag> {
    values
        .iter()
        .map(|v| Tag {
            description: v.to_string(),
        })
        .collect()
}

fn achievements(total: usize, achieved: usize) -> Vec<Achievement> {
    (0..total)
        .map(|i| Achievement {
            apiname: format!("ACH_{i}"),
            achieved: u8::from(i < achieved),
            unlocktime: 0,
        })
        .collect()
}

#[test]
fn sanitize_replaces_commas_without_splitting() {
    assert_eq!(sanitize_option("Action, Adventure"), "Action Adventure");
    assert_eq!(sanitize_option("Valve,Hidden Path"), "Valve Hidden Path");
    assert_eq!(sanitize_option("Indie"), "Indie");
    assert_eq!(sanitize_option(""), "");
}

#[test]
fn fraction_is_zero_without_achievements() {
    assert_eq!(achievement_fraction(&[]), 0.0);
}

#[test]
fn fraction_rounds_to_two_decimals() {
    assert_eq!(achievement_fraction(&achievements(2, 1)), 0.5);
    assert_eq!(achievement_fraction(&achievements(3, 1)), 0.33);
    assert_eq!(achievement_fraction(&achievements(3, 2)), 0.67);
    assert_eq!(achievement_fraction(&achievements(4, 4)), 1.0);
    assert_eq!(achievement_fraction(&achievements(7, 0)), 0.0);
}

#[test]
fn only_achieved_flag_one_counts() {
    let mut list = achievements(2, 0);
    list[0].achieved = 1;
    list[1].achieved = 2;
    assert_eq!(achievement_fraction(&list), 0.5);
}

#[test]
fn build_with_details() {
    let details = AppDetails {
        steam_appid: 10,
        name: "Counter-Strike".to_string(),
        genres: tags(&["Action"]),
        categories: vec![],
        developers: vec!["Valve".to_string()],
        publishers: vec!["Valve".to_string()],
    };

    let record = GameRecord::build(&game(10, "Counter-Strike", "abc"), Some(&details), 0.5);

    assert_eq!(
        record,
        GameRecord {
            id: "10".to_string(),
            name: "Counter-Strike".to_string(),
            genres: vec!["Action".to_string()],
            categories: vec![],
            developers: vec!["Valve".to_string()],
            achievements: 0.5,
        }
    );
}

#[test]
fn build_sanitizes_every_list_column() {
    let details = AppDetails {
        genres: tags(&["Action, Adventure", "RPG"]),
        categories: tags(&["Single-player", "Steam Cloud, Sync"]),
        developers: vec!["Studio, Inc.".to_string()],
        ..AppDetails::default()
    };

    let record = GameRecord::build(&game(440, "Team Fortress 2", ""), Some(&details), 0.0);

    assert_eq!(record.genres, vec!["Action Adventure", "RPG"]);
    assert_eq!(record.categories, vec!["Single-player", "Steam Cloud Sync"]);
    assert_eq!(record.developers, vec!["Studio Inc."]);
    for value in record
        .genres
        .iter()
        .chain(&record.categories)
        .chain(&record.developers)
    {
        assert!(!value.contains(','), "comma left in {value:?}");
    }
}

#[test]
fn build_without_details_leaves_lists_empty() {
    let record = GameRecord::build(&game(70, "Half-Life", "xyz"), None, 0.25);

    assert_eq!(record.id, "70");
    assert_eq!(record.name, "Half-Life");
    assert!(record.genres.is_empty());
    assert!(record.categories.is_empty());
    assert!(record.developers.is_empty());
    assert_eq!(record.achievements, 0.25);
}

#[test]
fn icon_url_from_hash() {
    assert_eq!(
        icon_url(10, "abc").as_deref(),
        Some("https://media.steampowered.com/steamcommunity/public/images/apps/10/abc.jpg")
    );
    assert_eq!(icon_url(10, ""), None);
}

#[test]
fn build_drops_blank_and_duplicate_options() {
    let details = AppDetails {
        genres: tags(&[",", "", "Action", "Action,"]),
        categories: tags(&["  ", "Co-op", "Co-op"]),
        developers: vec![" , ".to_string()],
        ..AppDetails::default()
    };

    let record = GameRecord::build(&game(20, "Odd Store Page", ""), Some(&details), 0.0);

    assert_eq!(record.genres, vec!["Action"]);
    assert_eq!(record.categories, vec!["Co-op"]);
    assert!(record.developers.is_empty());
}
