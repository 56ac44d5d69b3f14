mod common;

use chrono::TimeDelta;

#[tokio::test]
async fn test_url_info_success() {
    let app = common::make_app();
    let code = common::create_link(&app, "https://example.com/info", Some("2h"), None);
    app.server.get(&format!("/{code}")).await;

    let response = app
        .server
        .get("/api/url")
        .add_query_param("code", &code)
        .add_header("X-API-Key", common::API_KEY)
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["long_url"], "https://example.com/info");
    assert_eq!(json["clicks"], 1);
    assert!(json["expires_at"].as_str().unwrap().ends_with('Z'));
    assert!(json.get("created_at").is_some());
    assert!(json.get("custom_name").is_none());
}

#[tokio::test]
async fn test_url_info_custom_name() {
    let app = common::make_app();
    common::create_link(&app, "https://example.com", None, Some("named"));

    let response = app
        .server
        .get("/api/url?code=named")
        .add_header("X-API-Key", common::API_KEY)
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["custom_name"], "named");
}

#[tokio::test]
async fn test_url_info_missing_code() {
    let app = common::make_app();

    let response = app
        .server
        .get("/api/url")
        .add_header("X-API-Key", common::API_KEY)
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_url_info_not_found() {
    let app = common::make_app();

    let response = app
        .server
        .get("/api/url?code=nonexistent")
        .add_header("X-API-Key", common::API_KEY)
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_url_info_expired() {
    let app = common::make_app();
    let code = common::create_link(&app, "https://example.com", Some("30s"), None);
    app.clock.advance(TimeDelta::seconds(31));

    let response = app
        .server
        .get("/api/url")
        .add_query_param("code", &code)
        .add_header("X-API-Key", common::API_KEY)
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_url_info_requires_api_key() {
    let app = common::make_app();
    let code = common::create_link(&app, "https://example.com", None, None);

    let response = app
        .server
        .get("/api/url")
        .add_query_param("code", &code)
        .await;

    response.assert_status_unauthorized();
    assert_eq!(response.header("www-authenticate"), "X-API-Key");
}

#[tokio::test]
async fn test_docs_are_public() {
    let app = common::make_app();

    let response = app.server.get("/api/docs").await;

    response.assert_status_ok();
    assert!(response.text().contains("/api/shorten"));
}
