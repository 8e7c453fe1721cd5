//! Unit tests for the Notion API module.

mod databases_tests;

use crate::notion::NotionApi;

pub(super) fn api_with_mock(mock_uri: &str) -> NotionApi {
    let mut api = NotionApi::new(reqwest::Client::new(), "test_token".to_string());
    api.base_url = mock_uri.to_string();
    api
}
