//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    FixtureModerationCommand, FixtureUsersAdminQuery, ModerationCommand, UsersAdminQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Admin read path over users.
    pub users: Arc<dyn UsersAdminQuery>,
    /// Admin moderation write path.
    pub moderation: Arc<dyn ModerationCommand>,
}

impl HttpState {
    /// Bundle concrete port implementations for the handlers.
    #[must_use]
    pub const fn new(
        users: Arc<dyn UsersAdminQuery>,
        moderation: Arc<dyn ModerationCommand>,
    ) -> Self {
        Self { users, moderation }
    }
}

impl Default for HttpState {
    fn default() -> Self {
        Self {
            users: Arc::new(FixtureUsersAdminQuery),
            moderation: Arc::new(FixtureModerationCommand),
        }
    }
}
