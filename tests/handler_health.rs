mod common;

use chrono::TimeDelta;

#[tokio::test]
async fn test_health_check() {
    let app = common::make_app();

    let response = app.server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert!(json.get("version").is_some());
    assert_eq!(json["checks"]["registry"]["status"], "ok");
}

#[tokio::test]
async fn test_health_reports_live_and_stored() {
    let app = common::make_app();
    common::create_link(&app, "https://a.com", Some("1m"), None);
    common::create_link(&app, "https://b.com", None, None);
    app.clock.advance(TimeDelta::minutes(5));

    let response = app.server.get("/health").await;

    let json = response.json::<serde_json::Value>();
    assert_eq!(
        json["checks"]["registry"]["message"],
        "1 live of 2 stored links"
    );
}
