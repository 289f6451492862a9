//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::{AccountService, LinkService};

/// Handles shared by all request handlers.
///
/// Carries no business state of its own, only the service handles and the
/// pool used by the health check.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub account_service: Arc<AccountService>,
    pub link_service: Arc<LinkService>,
}

impl AppState {
    pub fn new(
        db: Arc<PgPool>,
        account_service: Arc<AccountService>,
        link_service: Arc<LinkService>,
    ) -> Self {
        Self {
            db,
            account_service,
            link_service,
        }
    }
}
