//! Shared application state injected into every axum handler.

use crate::service::GuestbookService;

#[derive(Clone)]
pub struct AppState {
    pub service: GuestbookService,
}

impl AppState {
    pub fn new(service: GuestbookService) -> Self {
        Self { service }
    }
}
