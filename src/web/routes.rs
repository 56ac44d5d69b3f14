//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::{home_handler, shorten_form_handler};
use crate::web::middleware::referrer;
use axum::{
    Router, middleware,
    routing::{get, post},
};

/// Browser routes.
///
/// # Endpoints
///
/// - `GET  /`        - Home page with form and live links
/// - `GET  /home`    - Same page
/// - `POST /shorten` - Form submission (referrer-checked)
pub fn routes(state: AppState) -> Router<AppState> {
    let form = Router::new()
        .route("/shorten", post(shorten_form_handler))
        .route_layer(middleware::from_fn_with_state(state, referrer::layer));

    Router::new()
        .route("/", get(home_handler))
        .route("/home", get(home_handler))
        .merge(form)
}
