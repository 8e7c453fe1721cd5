//! Database schema and the wire shape of row properties.

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::record::GameRecord;

pub const COLUMN_ID: &str = "ID";
pub const COLUMN_NAME: &str = "Name";
pub const COLUMN_GENRES: &str = "Generos";
pub const COLUMN_CATEGORIES: &str = "Categories";
pub const COLUMN_DEVELOPERS: &str = "Desarrollador";
pub const COLUMN_ACHIEVEMENTS: &str = "achievements";

/// Notion property types used by the games database
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Title,
    RichText,
    MultiSelect,
    Number,
    /// Number column displayed as a percentage
    Percent,
    Date,
    Status,
}

impl ColumnType {
    fn definition(self) -> Value {
        match self {
            ColumnType::Title => json!({ "type": "title", "title": {} }),
            ColumnType::RichText => json!({ "type": "rich_text", "rich_text": {} }),
            ColumnType::MultiSelect => json!({ "type": "multi_select", "multi_select": {} }),
            ColumnType::Number => json!({ "type": "number", "number": {} }),
            ColumnType::Percent => {
                json!({ "type": "number", "number": { "format": "percent" } })
            }
            ColumnType::Date => json!({ "type": "date", "date": {} }),
            ColumnType::Status => json!({ "type": "status", "status": {} }),
        }
    }
}

/// Columns of the games database. `Rating`, `Status` and the dates are
/// filled in by hand in Notion and never written by the sync.
pub const DATABASE_SCHEMA: &[(&str, ColumnType)] = &[
    (COLUMN_ID, ColumnType::RichText),
    (COLUMN_NAME, ColumnType::Title),
    (COLUMN_GENRES, ColumnType::MultiSelect),
    (COLUMN_CATEGORIES, ColumnType::MultiSelect),
    (COLUMN_DEVELOPERS, ColumnType::MultiSelect),
    ("Rating", ColumnType::Number),
    ("Date Started", ColumnType::Date),
    ("Status", ColumnType::Status),
    ("Date Finished", ColumnType::Date),
    (COLUMN_ACHIEVEMENTS, ColumnType::Percent),
];

/// `properties` object for database create and update calls.
pub fn database_properties() -> Value {
    let columns: Map<String, Value> = DATABASE_SCHEMA
        .iter()
        .map(|(name, column)| (name.to_string(), column.definition()))
        .collect();
    Value::Object(columns)
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum PropertyValue {
    Title { title: Vec<TextBlock> },
    RichText { rich_text: Vec<TextBlock> },
    MultiSelect { multi_select: Vec<SelectOption> },
    Number { number: f64 },
}

#[derive(Debug, Serialize)]
struct TextBlock {
    r#type: &'static str,
    text: TextContent,
}

#[derive(Debug, Serialize)]
struct TextContent {
    content: String,
}

#[derive(Debug, Serialize)]
struct SelectOption {
    name: String,
}

fn text(content: &str) -> Vec<TextBlock> {
    vec![TextBlock {
        r#type: "text",
        text: TextContent {
            content: content.to_string(),
        },
    }]
}

fn options(values: &[String]) -> Vec<SelectOption> {
    values
        .iter()
        .map(|name| SelectOption { name: name.clone() })
        .collect()
}

/// `properties` object for page create and update calls.
///
/// Only the synced columns are present, so an update overwrites exactly
/// these and leaves hand-edited columns alone.
pub fn page_properties(record: &GameRecord) -> Value {
    let properties = [
        (
            COLUMN_ID,
            PropertyValue::RichText {
                rich_text: text(&record.id),
            },
        ),
        (
            COLUMN_NAME,
            PropertyValue::Title {
                title: text(&record.name),
            },
        ),
        (
            COLUMN_GENRES,
            PropertyValue::MultiSelect {
                multi_select: options(&record.genres),
            },
        ),
        (
            COLUMN_CATEGORIES,
            PropertyValue::MultiSelect {
                multi_select: options(&record.categories),
            },
        ),
        (
            COLUMN_DEVELOPERS,
            PropertyValue::MultiSelect {
                multi_select: options(&record.developers),
            },
        ),
        (
            COLUMN_ACHIEVEMENTS,
            PropertyValue::Number {
                number: record.achievements,
            },
        ),
    ];

    let map: Map<String, Value> = properties
        .into_iter()
        .map(|(name, value)| (name.to_string(), json!(value)))
        .collect();
    Value::Object(map)
}
