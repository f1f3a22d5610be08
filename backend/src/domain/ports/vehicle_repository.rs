//! Persistence port for vehicle registration records.

use async_trait::async_trait;

use crate::domain::{ApprovalStatus, VehicleId, VehicleRecord};

use super::define_port_error;

define_port_error! {
    /// Errors raised by vehicle repository adapters.
    pub enum VehicleRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "vehicle repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "vehicle repository query failed: {message}",
    }
}

/// Port for vehicle storage and the approval-status write path.
///
/// The approval status is the only field this service mutates. The update
/// must be durable before the caller reacts to it; notification dispatch
/// happens after `set_approval` returns.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Fetch a vehicle by identifier.
    ///
    /// Returns `None` if no vehicle exists with the given id.
    async fn find_by_id(
        &self,
        id: &VehicleId,
    ) -> Result<Option<VehicleRecord>, VehicleRepositoryError>;

    /// Persist a new approval status and return the updated record.
    ///
    /// Returns `None` if no vehicle exists with the given id.
    async fn set_approval(
        &self,
        id: &VehicleId,
        status: ApprovalStatus,
    ) -> Result<Option<VehicleRecord>, VehicleRepositoryError>;
}

/// Fixture implementation used until a real persistence adapter is wired.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureVehicleRepository;

#[async_trait]
impl VehicleRepository for FixtureVehicleRepository {
    async fn find_by_id(
        &self,
        _id: &VehicleId,
    ) -> Result<Option<VehicleRecord>, VehicleRepositoryError> {
        Ok(None)
    }

    async fn set_approval(
        &self,
        _id: &VehicleId,
        _status: ApprovalStatus,
    ) -> Result<Option<VehicleRecord>, VehicleRepositoryError> {
        Ok(None)
    }
}
