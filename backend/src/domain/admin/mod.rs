//! Admin moderation domain services.
//!
//! Implements the driving ports for the admin surface: the user read path,
//! the vehicle approval state machine, and the user activation toggle.

mod service;

pub use service::AdminUserService;

/// User fields the free-text search term is matched against.
pub const USER_SEARCH_FIELDS: [&str; 3] = ["name", "email", "mobileNumber"];

/// Default page size for the user list.
pub const USER_DEFAULT_PER_PAGE: u64 = 20;

/// Default ordering field for the user list.
pub const USER_DEFAULT_ORDER_BY: &str = "createdAt";
