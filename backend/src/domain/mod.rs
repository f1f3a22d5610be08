//! Domain primitives, aggregates, and services.
//!
//! Purpose: define the strongly typed entities and workflows of the admin
//! moderation surface, independent of transport and storage. Inbound
//! adapters consume the driving ports in [`ports`]; outbound adapters
//! implement the driven ports there.

pub mod admin;
pub mod dispatch;
pub mod error;
pub mod listing;
pub mod notifications;
pub mod ports;
pub mod user;
pub mod vehicle;

#[cfg(test)]
pub(crate) mod test_support;

#[cfg(test)]
pub use self::dispatch::MockNotificationDispatch;
pub use self::dispatch::{DispatchOutcome, DispatchRequest, Dispatcher, NotificationDispatch};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::user::{User, UserId, UserIdValidationError, UserRole};
pub use self::vehicle::{
    ApprovalStatus, ParseApprovalStatusError, VehicleId, VehicleIdValidationError, VehicleRecord,
};
