//! Row lookup and page create/update.

use reqwest::Method;
use serde_json::json;

use super::schema::{page_properties, COLUMN_ID};
use super::{ListResponse, NotionApi, ObjectRef};
use crate::error::Result;
use crate::record::GameRecord;

impl NotionApi {
    /// Page id of the row whose `ID` equals `id`, if any.
    ///
    /// Only the first match is used; more than one means the table already
    /// holds duplicates, which is logged.
    pub async fn find_page(&self, database_id: &str, id: &str) -> Result<Option<String>> {
        let body = json!({
            "filter": {
                "property": COLUMN_ID,
                "rich_text": { "equals": id }
            }
        });

        let response: ListResponse<ObjectRef> = self
            .request(Method::POST, &format!("databases/{}/query", database_id), &body)
            .await?;

        if response.results.len() > 1 {
            log::warn!(
                "{} rows share ID {}, updating the first one only",
                response.results.len(),
                id
            );
        }
        Ok(response.results.into_iter().next().map(|page| page.id))
    }

    /// Create a row, optionally with an external icon.
    pub async fn create_page(
        &self,
        database_id: &str,
        record: &GameRecord,
        icon_url: Option<&str>,
    ) -> Result<String> {
        let mut body = json!({
            "parent": { "database_id": database_id },
            "properties": page_properties(record),
        });
        if let Some(url) = icon_url {
            body["icon"] = json!({ "type": "external", "external": { "url": url } });
        }

        let created: ObjectRef = self.request(Method::POST, "pages", &body).await?;
        Ok(created.id)
    }

    /// Overwrite the synced columns of an existing row.
    pub async fn update_page(&self, page_id: &str, record: &GameRecord) -> Result<()> {
        let body = json!({ "properties": page_properties(record) });
        let _: ObjectRef = self
            .request(Method::PATCH, &format!("pages/{}", page_id), &body)
            .await?;
        Ok(())
    }
}
