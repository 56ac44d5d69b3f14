//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use chrono::SecondsFormat;

use crate::domain::entities::RecordView;
use crate::state::AppState;

/// One row of the live links table.
pub struct LinkRow {
    pub code: String,
    pub short_url: String,
    pub long_url: String,
    pub clicks: u64,
    pub expires_at: String,
}

impl LinkRow {
    fn new(view: RecordView, short_url: String) -> Self {
        Self {
            short_url,
            code: view.code,
            long_url: view.target,
            clicks: view.clicks,
            expires_at: view.expires_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// Template for the home page.
///
/// Renders `templates/home.html` with:
/// - Link creation form
/// - Table of live links with click counts
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub links: Vec<LinkRow>,
    pub default_ttl: String,
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
///
/// Expired links are left out even if they have not been swept yet.
pub async fn home_handler(State(state): State<AppState>) -> impl IntoResponse {
    let service = &state.link_service;

    let links = service
        .live_links()
        .into_iter()
        .map(|view| {
            let short_url = service.short_url(&view.code);
            LinkRow::new(view, short_url)
        })
        .collect();

    HomeTemplate {
        links,
        default_ttl: crate::utils::ttl::format_ttl(service.default_ttl()),
    }
}
