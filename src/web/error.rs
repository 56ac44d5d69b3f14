//! HTML rendering of [`AppError`] for browser routes.

use askama::Template;
use axum::response::{Html, IntoResponse, Response};

use crate::error::AppError;

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate<'a> {
    status: u16,
    message: &'a str,
}

/// An [`AppError`] that renders as a page instead of JSON.
#[derive(Debug)]
pub struct WebError(pub AppError);

impl From<AppError> for WebError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        let message = self.0.to_string();

        let page = ErrorTemplate {
            status: status.as_u16(),
            message: &message,
        };

        match page.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => {
                tracing::error!("Failed to render error page: {}", e);
                self.0.into_response()
            }
        }
    }
}
