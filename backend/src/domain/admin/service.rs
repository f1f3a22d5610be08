//! Admin user service implementing the driving ports.
//!
//! Write operations persist through the repositories first and only then
//! hand a delivery order to the notification dispatch, so a transport fault
//! can never roll back or fail a committed state change.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::{PageInfo, PaginationError};
use serde_json::json;
use tracing::info;

use crate::domain::listing::{compose, FilterFragment};
use crate::domain::notifications::NotificationEvent;
use crate::domain::ports::{
    ListUsersRequest, ModerationCommand, UserPage, UserRepository, UserRepositoryError,
    UsersAdminQuery, VehicleRepository, VehicleRepositoryError,
};
use crate::domain::{
    ApprovalStatus, DispatchRequest, Error, NotificationDispatch, User, UserId, VehicleId,
    VehicleRecord,
};

use super::USER_SEARCH_FIELDS;

/// Admin moderation service over the user and vehicle repositories.
#[derive(Clone)]
pub struct AdminUserService<U, V> {
    users: Arc<U>,
    vehicles: Arc<V>,
    dispatch: Arc<dyn NotificationDispatch>,
}

impl<U, V> AdminUserService<U, V> {
    /// Create a new service with the given repositories and dispatch.
    #[must_use]
    pub const fn new(
        users: Arc<U>,
        vehicles: Arc<V>,
        dispatch: Arc<dyn NotificationDispatch>,
    ) -> Self {
        Self {
            users,
            vehicles,
            dispatch,
        }
    }
}

impl<U, V> AdminUserService<U, V>
where
    U: UserRepository,
    V: VehicleRepository,
{
    fn map_user_repo_error(error: UserRepositoryError) -> Error {
        match error {
            UserRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("user repository unavailable: {message}"))
            }
            UserRepositoryError::Query { message } => {
                Error::internal(format!("user repository error: {message}"))
            }
        }
    }

    fn map_vehicle_repo_error(error: VehicleRepositoryError) -> Error {
        match error {
            VehicleRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("vehicle repository unavailable: {message}"))
            }
            VehicleRepositoryError::Query { message } => {
                Error::internal(format!("vehicle repository error: {message}"))
            }
        }
    }

    /// Merge the request's filter sources into one predicate.
    ///
    /// Search contributes first so the explicit role and activity filters
    /// win on key collision. The activity filter defaults to both states,
    /// matching the original list behaviour.
    fn user_filter(request: &ListUsersRequest) -> FilterFragment {
        let mut fragments = Vec::with_capacity(3);
        if let Some(term) = &request.search {
            fragments.push(FilterFragment::search(USER_SEARCH_FIELDS, term.clone()));
        }
        if let Some(role) = request.role {
            fragments.push(FilterFragment::equals("role", json!(role)));
        }
        let active_values = request
            .active
            .map_or_else(|| vec![json!(true), json!(false)], |flag| vec![json!(flag)]);
        fragments.push(FilterFragment::any_of("isActive", active_values));
        compose(fragments)
    }

    const fn vehicle_event(target: ApprovalStatus) -> Option<NotificationEvent> {
        match target {
            ApprovalStatus::Approve => Some(NotificationEvent::VehicleApproved),
            ApprovalStatus::Reject => Some(NotificationEvent::VehicleRejected),
            ApprovalStatus::Pending => None,
        }
    }
}

#[async_trait]
impl<U, V> UsersAdminQuery for AdminUserService<U, V>
where
    U: UserRepository,
    V: VehicleRepository,
{
    async fn find_user(&self, id: &UserId) -> Result<User, Error> {
        self.users
            .find_by_id(id)
            .await
            .map_err(Self::map_user_repo_error)?
            .ok_or_else(|| {
                Error::not_found("user not found").with_details(json!({ "userId": id }))
            })
    }

    async fn list_users(&self, request: ListUsersRequest) -> Result<UserPage, Error> {
        if request.page.limit == 0 {
            return Err(Error::invalid_request(
                PaginationError::InvalidLimit.to_string(),
            ));
        }

        let filter = Self::user_filter(&request);
        let data = self
            .users
            .find_all(&filter, &request.page)
            .await
            .map_err(Self::map_user_repo_error)?;
        let total = self
            .users
            .count(&filter)
            .await
            .map_err(Self::map_user_repo_error)?;
        let pagination = PageInfo::compute(total, request.page.limit)
            .map_err(|err| Error::invalid_request(err.to_string()))?;

        Ok(UserPage { data, pagination })
    }
}

#[async_trait]
impl<U, V> ModerationCommand for AdminUserService<U, V>
where
    U: UserRepository,
    V: VehicleRepository,
{
    async fn approve_vehicle(
        &self,
        id: &VehicleId,
        target: ApprovalStatus,
    ) -> Result<VehicleRecord, Error> {
        let previous = self
            .vehicles
            .find_by_id(id)
            .await
            .map_err(Self::map_vehicle_repo_error)?
            .ok_or_else(|| {
                Error::not_found("vehicle not found").with_details(json!({ "vehicleId": id }))
            })?;

        let updated = self
            .vehicles
            .set_approval(id, target)
            .await
            .map_err(Self::map_vehicle_repo_error)?
            .ok_or_else(|| {
                // The record vanished between load and update.
                Error::not_found("vehicle not found").with_details(json!({ "vehicleId": id }))
            })?;

        info!(
            vehicle_id = %id,
            owner_id = %updated.owner_id,
            from = %previous.approval,
            to = %target,
            "vehicle approval status updated"
        );

        // Re-submitting the stored status is a no-op transition; skip the
        // notification rather than telling the owner twice.
        if previous.approval != target {
            if let Some(event) = Self::vehicle_event(target) {
                self.dispatch.enqueue(DispatchRequest::for_templates(
                    vec![updated.owner_id.clone()],
                    event.templates(),
                ));
            }
        }

        Ok(updated)
    }

    async fn set_user_active(&self, id: &UserId, active: bool) -> Result<User, Error> {
        let updated = self
            .users
            .set_active(id, active)
            .await
            .map_err(Self::map_user_repo_error)?
            .ok_or_else(|| {
                Error::not_found("user not found").with_details(json!({ "userId": id }))
            })?;

        info!(user_id = %id, active, "user activity flag updated");

        let event = if active {
            NotificationEvent::UserUnblocked
        } else {
            NotificationEvent::UserBlocked
        };
        self.dispatch.enqueue(DispatchRequest::for_templates(
            vec![updated.id.clone()],
            event.templates(),
        ));

        Ok(updated)
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod service_tests;
