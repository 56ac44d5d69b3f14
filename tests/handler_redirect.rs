mod common;

use chrono::TimeDelta;

#[tokio::test]
async fn test_redirect_success() {
    let app = common::make_app();
    let code = common::create_link(&app, "https://example.com/target", None, None);

    let response = app.server.get(&format!("/{code}")).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let app = common::make_app();

    let response = app.server.get("/nonexistent").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_redirect_counts_clicks() {
    let app = common::make_app();
    let code = common::create_link(&app, "https://example.com", None, Some("counted"));

    for _ in 0..3 {
        app.server.get("/counted").await;
    }

    assert_eq!(app.state.link_service.clicks(&code).unwrap(), 3);
}

#[tokio::test]
async fn test_redirect_expired_link() {
    let app = common::make_app();
    let code = common::create_link(&app, "https://example.com", Some("1m"), None);

    app.clock.advance(TimeDelta::seconds(61));

    let response = app.server.get(&format!("/{code}")).await;

    response.assert_status_not_found();
    assert_eq!(app.state.link_service.registry().len(), 0);
}

#[tokio::test]
async fn test_redirect_valid_at_exact_deadline() {
    let app = common::make_app();
    let code = common::create_link(&app, "https://example.com", Some("1m"), None);

    app.clock.advance(TimeDelta::minutes(1));

    let response = app.server.get(&format!("/{code}")).await;

    assert_eq!(response.status_code(), 302);
}

#[tokio::test]
async fn test_redirect_ignores_trailing_slash() {
    let app = common::make_app();
    common::create_link(&app, "https://example.com/slashy", None, Some("slashy"));

    let response = app.server.get("/slashy/").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/slashy");
}

#[tokio::test]
async fn test_redirect_extra_segment_is_not_a_code() {
    let app = common::make_app();
    common::create_link(&app, "https://example.com", None, Some("slashy"));

    let response = app.server.get("/slashy/extra").await;

    response.assert_status_not_found();
}
