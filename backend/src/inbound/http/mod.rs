//! HTTP inbound adapter exposing the admin REST endpoints.

pub mod admin_users;
pub mod error;
pub mod health;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::HttpState;
