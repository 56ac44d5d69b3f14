//! Form-based link creation.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{State, rejection::FormRejection},
};
use chrono::SecondsFormat;
use serde::Deserialize;
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::error::WebError;

/// Fields of the home page form. Every field arrives as a string; blank
/// optional fields mean "use the default".
#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub expires_in: Option<String>,
    #[serde(default)]
    pub custom_name: Option<String>,
}

/// Template for the result page.
///
/// Shows the short URL and polls `/clicks/{code}` to keep the counter fresh.
#[derive(Template, WebTemplate)]
#[template(path = "shortened.html")]
pub struct ShortenedTemplate {
    pub code: String,
    pub short_url: String,
    pub long_url: String,
    pub expires_at: String,
}

/// Handles the home page form.
///
/// # Endpoint
///
/// `POST /shorten` (referrer-checked)
///
/// # Errors
///
/// Renders an error page with status 400 for invalid input and 409 when the
/// custom name is taken.
pub async fn shorten_form_handler(
    State(state): State<AppState>,
    form: Result<Form<ShortenForm>, FormRejection>,
) -> Result<ShortenedTemplate, WebError> {
    let Form(form) = form.map_err(|rejection| {
        AppError::bad_request(
            "Invalid form submission",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    let link = state.link_service.shorten(
        &form.url,
        form.expires_in.as_deref(),
        form.custom_name.as_deref(),
    )?;

    Ok(ShortenedTemplate {
        code: link.code,
        short_url: link.short_url,
        long_url: link.long_url,
        expires_at: link.expires_at.to_rfc3339_opts(SecondsFormat::Secs, true),
    })
}
