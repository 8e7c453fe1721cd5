//! Tests for database search, creation and schema updates.

use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::api_with_mock;
use crate::error::SyncError;

fn search_result(id: &str, title: &str) -> serde_json::Value {
    serde_json::json!({
        "object": "database",
        "id": id,
        "title": [{ "type": "text", "plain_text": title, "text": { "content": title } }]
    })
}

#[tokio::test]
async fn find_database_sends_auth_and_version() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/v1/search"))
        .and(header("Authorization", "Bearer test_token"))
        .and(header("Notion-Version", "2022-06-28"))
        .and(body_partial_json(serde_json::json!({
            "query": "Steam Videojuegos",
            "filter": { "property": "object", "value": "database" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "object": "list",
            "results": [search_result("db-1", "Steam Videojuegos")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let id = api.find_database("Steam Videojuegos").await.unwrap();
    assert_eq!(id.as_deref(), Some("db-1"));
}

#[tokio::test]
async fn find_database_ignores_fuzzy_matches() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [
                search_result("db-old", "Steam Videojuegos (archive)"),
                search_result("db-1", "Steam Videojuegos")
            ]
        })))
        .mount(&mock_server)
        .await;

    let id = api.find_database("Steam Videojuegos").await.unwrap();
    assert_eq!(id.as_deref(), Some("db-1"));
}

#[tokio::test]
async fn ensure_database_creates_when_missing() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": []
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/databases"))
        .and(body_partial_json(serde_json::json!({
            "parent": { "type": "page_id", "page_id": "page-123" },
            "title": [{ "type": "text", "text": { "content": "Steam Videojuegos" } }],
            "properties": {
                "achievements": { "type": "number", "number": { "format": "percent" } }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "object": "database",
            "id": "db-new"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let id = api
        .ensure_database("page-123", "Steam Videojuegos")
        .await
        .unwrap();
    assert_eq!(id, "db-new");
}

#[tokio::test]
async fn ensure_database_updates_schema_when_present() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [search_result("db-1", "Steam Videojuegos")]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/v1/databases/db-1"))
        .and(body_partial_json(serde_json::json!({
            "properties": { "ID": { "type": "rich_text", "rich_text": {} } }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "object": "database",
            "id": "db-1"
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/databases"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    // Twice: the second call must not create a second database
    for _ in 0..2 {
        let id = api
            .ensure_database("page-123", "Steam Videojuegos")
            .await
            .unwrap();
        assert_eq!(id, "db-1");
    }
}

#[tokio::test]
async fn unauthorized_search_is_api_error() {
    let mock_server = MockServer::start().await;
    let api = api_with_mock(&mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "object": "error",
            "status": 401,
            "code": "unauthorized",
            "message": "API token is invalid."
        })))
        .mount(&mock_server)
        .await;

    match api.ensure_database("page-123", "Steam Videojuegos").await {
        Err(SyncError::Api { status, body }) => {
            assert_eq!(status.as_u16(), 401);
            assert!(body.contains("unauthorized"));
        }
        other => panic!("Expected SyncError::Api, got: {other:?}"),
    }
}
