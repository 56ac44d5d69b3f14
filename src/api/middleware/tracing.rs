//! HTTP access logging middleware.

use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span};

/// Span factory recording method and path only.
///
/// Query strings are left out so API lookups (`/api/url?code=...`) don't
/// spill codes into every log line.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessSpan;

impl<B> MakeSpan<B> for AccessSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        tracing::info_span!(
            "request",
            method = %request.method(),
            path = %request.uri().path(),
        )
    }
}

/// Access log layer type produced by [`layer`].
pub type AccessLogLayer = TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    AccessSpan,
    DefaultOnRequest,
    DefaultOnResponse,
>;

/// Creates the access log middleware.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET path=/abc123}: finished processing request latency=0 ms status=302
/// ```
pub fn layer() -> AccessLogLayer {
    TraceLayer::new_for_http()
        .make_span_with(AccessSpan)
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
