//! Database lookup, creation and schema updates.

use reqwest::Method;
use serde::Deserialize;
use serde_json::json;

use super::schema::database_properties;
use super::{ListResponse, NotionApi, ObjectRef};
use crate::error::Result;

#[derive(Debug, Deserialize)]
struct DatabaseObject {
    id: String,
    #[serde(default)]
    title: Vec<PlainText>,
}

#[derive(Debug, Deserialize)]
struct PlainText {
    #[serde(default)]
    plain_text: String,
}

impl DatabaseObject {
    fn title(&self) -> String {
        self.title.iter().map(|t| t.plain_text.as_str()).collect()
    }
}

impl NotionApi {
    /// Id of the first database whose title is exactly `title`.
    ///
    /// Notion search is fuzzy, so results are filtered on the full title.
    pub async fn find_database(&self, title: &str) -> Result<Option<String>> {
        log::debug!("Searching for database '{}'", title);
        let body = json!({
            "query": title,
            "filter": { "property": "object", "value": "database" }
        });

        let response: ListResponse<DatabaseObject> =
            self.request(Method::POST, "search", &body).await?;

        let found = response
            .results
            .into_iter()
            .find(|db| db.title() == title)
            .map(|db| db.id);

        match &found {
            Some(id) => log::debug!("Found database '{}' ({})", title, id),
            None => log::debug!("No database titled '{}'", title),
        }
        Ok(found)
    }

    /// Create the games database under `parent_page_id` with the full schema.
    pub async fn create_database(&self, parent_page_id: &str, title: &str) -> Result<String> {
        let body = json!({
            "parent": { "type": "page_id", "page_id": parent_page_id },
            "title": [{ "type": "text", "text": { "content": title } }],
            "properties": database_properties(),
        });

        let created: ObjectRef = self.request(Method::POST, "databases", &body).await?;
        log::info!("Created database '{}' ({})", title, created.id);
        Ok(created.id)
    }

    /// Re-assert the schema on an existing database. Idempotent.
    pub async fn update_database_schema(&self, database_id: &str) -> Result<()> {
        let body = json!({ "properties": database_properties() });
        let _: ObjectRef = self
            .request(Method::PATCH, &format!("databases/{}", database_id), &body)
            .await?;
        log::info!("Updated schema of database {}", database_id);
        Ok(())
    }

    /// Find the database by title, creating it if absent, and return its id.
    pub async fn ensure_database(&self, parent_page_id: &str, title: &str) -> Result<String> {
        match self.find_database(title).await? {
            Some(id) => {
                log::info!("Database '{}' already exists, updating schema...", title);
                self.update_database_schema(&id).await?;
                Ok(id)
            }
            None => {
                log::info!("Database '{}' not found, creating it...", title);
                self.create_database(parent_page_id, title).await
            }
        }
    }
}
