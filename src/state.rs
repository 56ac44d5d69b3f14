//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AuthService, LinkService};

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService>, auth_service: Arc<AuthService>) -> Self {
        Self {
            link_service,
            auth_service,
        }
    }
}
