//! User aggregate and its value types.
//!
//! Identifiers on this platform are opaque strings minted by the storage
//! layer, so [`UserId`] validates shape (non-empty, trimmed) rather than any
//! particular encoding.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Opaque user identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct UserId(String);

/// Validation errors returned when constructing [`UserId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserIdValidationError {
    /// Identifier is empty after trimming whitespace.
    #[error("user id must not be empty")]
    Empty,
    /// Identifier contains leading or trailing whitespace.
    #[error("user id must not contain surrounding whitespace")]
    ContainsWhitespace,
}

impl UserId {
    /// Construct an identifier after validating that it is non-empty and
    /// trimmed.
    ///
    /// # Errors
    /// Returns a [`UserIdValidationError`] for blank or padded input.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::UserId;
    ///
    /// let id = UserId::new("64f0c33a9d2f1a0012ab34cd").expect("valid id");
    /// assert_eq!(id.as_str(), "64f0c33a9d2f1a0012ab34cd");
    /// ```
    pub fn new(value: impl Into<String>) -> Result<Self, UserIdValidationError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(UserIdValidationError::Empty);
        }
        if raw.trim() != raw {
            return Err(UserIdValidationError::ContainsWhitespace);
        }
        Ok(Self(raw))
    }

    /// Borrow the underlying identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Access role attached to a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Platform administrator.
    Admin,
    /// Regular rider account.
    User,
    /// Account that registers and operates vehicles.
    VehicleOwner,
    /// Driver assigned to an owner's vehicle.
    Driver,
}

/// User account as the admin surface sees it.
///
/// Mutated only through the activation toggle in this service; every other
/// write path lives elsewhere. The activity flag is strictly two-state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Opaque identifier.
    pub id: UserId,
    /// Name shown in the admin list view.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact number used by the messaging channel.
    pub mobile_number: String,
    /// Access role.
    pub role: UserRole,
    /// Whether the account is currently usable.
    pub is_active: bool,
    /// Whether the account has been blocked by an administrator.
    pub blocked: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Return a copy with the activity flag replaced and the update
    /// timestamp refreshed.
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.is_active = active;
        self.blocked = !active;
        self.updated_at = Utc::now();
        self
    }
}
