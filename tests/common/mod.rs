#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use chrono::{TimeDelta, Utc};
use std::sync::Arc;
use volatile_shortener::application::services::{AuthService, LinkService};
use volatile_shortener::domain::clock::ManualClock;
use volatile_shortener::domain::registry::Registry;
use volatile_shortener::routes::app_router;
use volatile_shortener::state::AppState;

pub const API_KEY: &str = "test-api-key";
pub const BASE_URL: &str = "http://s.test";
pub const REFERER: &str = "http://s.test/";

/// Server over a fresh registry whose clock only moves when told to.
pub struct TestApp {
    pub server: TestServer,
    pub clock: ManualClock,
    pub state: AppState,
}

pub fn create_test_state(clock: &ManualClock) -> AppState {
    let registry = Arc::new(Registry::with_clock(Arc::new(clock.clone())));
    let link_service = Arc::new(LinkService::new(
        registry,
        TimeDelta::hours(24),
        BASE_URL,
    ));
    let auth_service = Arc::new(AuthService::new(API_KEY, vec![REFERER.to_string()]));

    AppState::new(link_service, auth_service)
}

pub fn make_app() -> TestApp {
    let clock = ManualClock::new(Utc::now());
    let state = create_test_state(&clock);
    let app = ServiceExt::<Request>::into_make_service(app_router(state.clone()));
    let server = TestServer::new(app).unwrap();

    TestApp {
        server,
        clock,
        state,
    }
}

/// Creates a link directly through the service and returns its code.
pub fn create_link(app: &TestApp, url: &str, expires_in: Option<&str>, custom: Option<&str>) -> String {
    app.state
        .link_service
        .shorten(url, expires_in, custom)
        .unwrap()
        .code
}
