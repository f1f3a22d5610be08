//! Driving port for admin moderation writes.
//!
//! Covers the two state-change workflows of the admin surface: the vehicle
//! approval state machine and the user activation toggle. Both persist the
//! change first and hand notification delivery to a background dispatch, so
//! the caller never waits on, or fails because of, the transport.

use async_trait::async_trait;

use crate::domain::{ApprovalStatus, Error, User, UserId, VehicleId, VehicleRecord};

/// Domain use-case port for moderation state changes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModerationCommand: Send + Sync {
    /// Move a vehicle registration request to `target` and notify the owner.
    ///
    /// Re-submitting the stored status is accepted idempotently and sends no
    /// notification.
    async fn approve_vehicle(
        &self,
        id: &VehicleId,
        target: ApprovalStatus,
    ) -> Result<VehicleRecord, Error>;

    /// Set a user's activity flag and notify the user of the new state.
    async fn set_user_active(&self, id: &UserId, active: bool) -> Result<User, Error>;
}

/// Fixture command used until persistence is wired: every record is missing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureModerationCommand;

#[async_trait]
impl ModerationCommand for FixtureModerationCommand {
    async fn approve_vehicle(
        &self,
        id: &VehicleId,
        _target: ApprovalStatus,
    ) -> Result<VehicleRecord, Error> {
        Err(Error::not_found(format!("no vehicle with id {id}")))
    }

    async fn set_user_active(&self, id: &UserId, _active: bool) -> Result<User, Error> {
        Err(Error::not_found(format!("no user with id {id}")))
    }
}
