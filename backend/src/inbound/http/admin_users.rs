//! Admin user and vehicle moderation handlers.
//!
//! ```text
//! GET   /api/v1/admin/users/{id}
//! GET   /api/v1/admin/users?search=&role=&isActive=&limit=&offset=&orderBy=&orderDirection=
//! PATCH /api/v1/admin/vehicles/{vehicleId}/approval/{status}
//! PATCH /api/v1/admin/users/{userId}/active/{active}
//! ```

use actix_web::{get, patch, web};
use pagination::{OrderDirection, PageRequest};
use serde::Deserialize;
use serde_json::json;

use crate::domain::admin::{USER_DEFAULT_ORDER_BY, USER_DEFAULT_PER_PAGE};
use crate::domain::ports::{ListUsersRequest, UserPage};
use crate::domain::{
    ApprovalStatus, Error, ParseApprovalStatusError, User, UserId, UserRole, VehicleId,
    VehicleRecord,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Query parameters accepted by the user list endpoint.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListUsersQuery {
    /// Free-text search across name, email, and mobile number.
    pub search: Option<String>,
    /// Exact-match role filter.
    pub role: Option<UserRole>,
    /// Activity filter; omit to include both active and blocked accounts.
    pub is_active: Option<bool>,
    /// Page size, defaulting to the user-list page size.
    pub limit: Option<u64>,
    /// Rows skipped before the page starts.
    pub offset: Option<u64>,
    /// Ordering field, defaulting to the creation timestamp.
    pub order_by: Option<String>,
    /// Ordering direction, defaulting to descending.
    #[param(value_type = Option<String>)]
    pub order_direction: Option<OrderDirection>,
}

impl From<ListUsersQuery> for ListUsersRequest {
    fn from(query: ListUsersQuery) -> Self {
        let page = PageRequest {
            limit: query.limit.unwrap_or(USER_DEFAULT_PER_PAGE),
            offset: query.offset.unwrap_or(0),
            order_by: Some(query.order_by.unwrap_or_else(|| USER_DEFAULT_ORDER_BY.to_owned())),
            direction: query.order_direction.unwrap_or_default(),
        };
        Self {
            search: query.search,
            role: query.role,
            active: query.is_active,
            page,
        }
    }
}

fn parse_user_id(raw: String) -> Result<UserId, Error> {
    UserId::new(raw).map_err(|err| {
        Error::invalid_request(err.to_string()).with_details(json!({ "field": "userId" }))
    })
}

fn parse_vehicle_id(raw: String) -> Result<VehicleId, Error> {
    VehicleId::new(raw).map_err(|err| {
        Error::invalid_request(err.to_string()).with_details(json!({ "field": "vehicleId" }))
    })
}

/// Fetch a single user by identifier.
#[utoipa::path(
    get,
    path = "/api/v1/admin/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = User),
        (status = 400, description = "Invalid identifier", body = crate::inbound::http::ApiError),
        (status = 404, description = "Unknown user", body = crate::inbound::http::ApiError),
        (status = 503, description = "Storage unavailable", body = crate::inbound::http::ApiError),
        (status = 500, description = "Internal server error", body = crate::inbound::http::ApiError)
    ),
    tags = ["admin.users"],
    operation_id = "getUser"
)]
#[get("/admin/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(path.into_inner())?;
    let user = state.users.find_user(&id).await?;
    Ok(web::Json(user))
}

/// List users with composed filters and offset pagination.
#[utoipa::path(
    get,
    path = "/api/v1/admin/users",
    params(ListUsersQuery),
    responses(
        (status = 200, description = "Page of users", body = UserPage),
        (status = 400, description = "Invalid page parameters", body = crate::inbound::http::ApiError)
    ),
    tags = ["admin.users"],
    operation_id = "listUsers"
)]
#[get("/admin/users")]
pub async fn list_users(
    state: web::Data<HttpState>,
    query: web::Query<ListUsersQuery>,
) -> ApiResult<web::Json<UserPage>> {
    let page = state.users.list_users(query.into_inner().into()).await?;
    Ok(web::Json(page))
}

/// Move a vehicle registration request to the given approval status.
///
/// The status segment must be one of `Pending`, `Approve`, or `Reject`; the
/// owner is notified on the push and messaging channels when the stored
/// status changes.
#[utoipa::path(
    patch,
    path = "/api/v1/admin/vehicles/{vehicleId}/approval/{status}",
    params(
        ("vehicleId" = String, Path, description = "Vehicle identifier"),
        ("status" = String, Path, description = "Target approval status")
    ),
    responses(
        (status = 200, description = "Updated vehicle", body = VehicleRecord),
        (status = 400, description = "Invalid identifier or status", body = crate::inbound::http::ApiError),
        (status = 404, description = "Unknown vehicle", body = crate::inbound::http::ApiError),
        (status = 503, description = "Storage unavailable", body = crate::inbound::http::ApiError),
        (status = 500, description = "Internal server error", body = crate::inbound::http::ApiError)
    ),
    tags = ["admin.vehicles"],
    operation_id = "approveVehicle"
)]
#[patch("/admin/vehicles/{vehicle_id}/approval/{status}")]
pub async fn approve_vehicle(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<web::Json<VehicleRecord>> {
    let (raw_id, raw_status) = path.into_inner();
    let id = parse_vehicle_id(raw_id)?;
    let target: ApprovalStatus = raw_status.parse().map_err(|err: ParseApprovalStatusError| {
        Error::invalid_request(err.to_string()).with_details(json!({
            "field": "status",
            "allowed": ["Pending", "Approve", "Reject"],
        }))
    })?;

    let updated = state.moderation.approve_vehicle(&id, target).await?;
    Ok(web::Json(updated))
}

/// Set a user's activity flag.
///
/// The flag segment must be exactly `true` or `false`; the user is notified
/// of the new state on the push and messaging channels.
#[utoipa::path(
    patch,
    path = "/api/v1/admin/users/{userId}/active/{active}",
    params(
        ("userId" = String, Path, description = "User identifier"),
        ("active" = String, Path, description = "New activity flag, `true` or `false`")
    ),
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 400, description = "Invalid identifier or flag", body = crate::inbound::http::ApiError),
        (status = 404, description = "Unknown user", body = crate::inbound::http::ApiError),
        (status = 503, description = "Storage unavailable", body = crate::inbound::http::ApiError),
        (status = 500, description = "Internal server error", body = crate::inbound::http::ApiError)
    ),
    tags = ["admin.users"],
    operation_id = "setUserActive"
)]
#[patch("/admin/users/{user_id}/active/{active}")]
pub async fn set_user_active(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<web::Json<User>> {
    let (raw_id, raw_active) = path.into_inner();
    let id = parse_user_id(raw_id)?;
    let active: bool = raw_active.parse().map_err(|_| {
        Error::invalid_request("activity flag must be `true` or `false`")
            .with_details(json!({ "field": "active" }))
    })?;

    let updated = state.moderation.set_user_active(&id, active).await?;
    Ok(web::Json(updated))
}

#[cfg(test)]
mod tests {
    //! Handler-level coverage with mocked driving ports.
    use std::sync::Arc;

    use actix_web::{test as actix_test, web, App};
    use pagination::PageInfo;
    use serde_json::Value;

    use super::*;
    use crate::domain::ports::{MockModerationCommand, MockUsersAdminQuery};
    use crate::domain::test_support::{sample_user, sample_vehicle};

    async fn send(
        state: HttpState,
        request: actix_test::TestRequest,
    ) -> actix_web::dev::ServiceResponse {
        let app = actix_test::init_service(
            App::new().app_data(web::Data::new(state)).service(
                web::scope("/api/v1")
                    .service(get_user)
                    .service(list_users)
                    .service(approve_vehicle)
                    .service(set_user_active),
            ),
        )
        .await;
        actix_test::call_service(&app, request.to_request()).await
    }

    fn state_with_query(users: MockUsersAdminQuery) -> HttpState {
        HttpState::new(Arc::new(users), Arc::new(MockModerationCommand::new()))
    }

    fn state_with_moderation(moderation: MockModerationCommand) -> HttpState {
        HttpState::new(Arc::new(MockUsersAdminQuery::new()), Arc::new(moderation))
    }

    #[actix_rt::test]
    async fn get_user_returns_the_record_as_json() {
        let mut users = MockUsersAdminQuery::new();
        users
            .expect_find_user()
            .times(1)
            .return_once(|_| Ok(sample_user("u-1", true)));

        let response = send(
            state_with_query(users),
            actix_test::TestRequest::get().uri("/api/v1/admin/users/u-1"),
        )
        .await;

        assert_eq!(response.status(), 200);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["id"], "u-1");
        assert_eq!(body["isActive"], true);
    }

    #[actix_rt::test]
    async fn get_user_maps_missing_records_to_404() {
        let mut users = MockUsersAdminQuery::new();
        users
            .expect_find_user()
            .times(1)
            .return_once(|_| Err(Error::not_found("user not found")));

        let response = send(
            state_with_query(users),
            actix_test::TestRequest::get().uri("/api/v1/admin/users/u-404"),
        )
        .await;

        assert_eq!(response.status(), 404);
    }

    #[actix_rt::test]
    async fn list_users_applies_the_documented_defaults() {
        let mut users = MockUsersAdminQuery::new();
        users
            .expect_list_users()
            .times(1)
            .withf(|request| {
                request.page.limit == USER_DEFAULT_PER_PAGE
                    && request.page.offset == 0
                    && request.page.order_by.as_deref() == Some(USER_DEFAULT_ORDER_BY)
                    && request.page.direction == OrderDirection::Desc
                    && request.search.is_none()
                    && request.role.is_none()
                    && request.active.is_none()
            })
            .return_once(|request| {
                Ok(UserPage {
                    data: Vec::new(),
                    pagination: PageInfo::compute(0, request.page.limit)
                        .map_err(|err| Error::invalid_request(err.to_string()))?,
                })
            });

        let response = send(
            state_with_query(users),
            actix_test::TestRequest::get().uri("/api/v1/admin/users"),
        )
        .await;

        assert_eq!(response.status(), 200);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["pagination"]["total"], 0);
        assert_eq!(body["pagination"]["totalPages"], 0);
    }

    #[actix_rt::test]
    async fn list_users_forwards_query_filters() {
        let mut users = MockUsersAdminQuery::new();
        users
            .expect_list_users()
            .times(1)
            .withf(|request| {
                request.search.as_deref() == Some("ada")
                    && request.role == Some(UserRole::Driver)
                    && request.active == Some(false)
                    && request.page.limit == 5
                    && request.page.offset == 10
            })
            .return_once(|_| {
                Ok(UserPage {
                    data: vec![sample_user("u-1", false)],
                    pagination: PageInfo { total: 11, total_pages: 3 },
                })
            });

        let response = send(
            state_with_query(users),
            actix_test::TestRequest::get()
                .uri("/api/v1/admin/users?search=ada&role=DRIVER&isActive=false&limit=5&offset=10"),
        )
        .await;

        assert_eq!(response.status(), 200);
    }

    #[actix_rt::test]
    async fn approve_vehicle_rejects_unknown_statuses_without_calling_the_port() {
        let mut moderation = MockModerationCommand::new();
        moderation.expect_approve_vehicle().times(0);

        let response = send(
            state_with_moderation(moderation),
            actix_test::TestRequest::patch().uri("/api/v1/admin/vehicles/v-1/approval/bogus"),
        )
        .await;

        assert_eq!(response.status(), 400);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["code"], "invalid_request");
        assert_eq!(body["details"]["field"], "status");
    }

    #[actix_rt::test]
    async fn approve_vehicle_returns_the_updated_record() {
        let mut moderation = MockModerationCommand::new();
        moderation
            .expect_approve_vehicle()
            .times(1)
            .withf(|id, target| id.as_str() == "v-1" && *target == ApprovalStatus::Approve)
            .return_once(|_, _| {
                Ok(sample_vehicle("v-1", "u-1").with_approval(ApprovalStatus::Approve))
            });

        let response = send(
            state_with_moderation(moderation),
            actix_test::TestRequest::patch().uri("/api/v1/admin/vehicles/v-1/approval/Approve"),
        )
        .await;

        assert_eq!(response.status(), 200);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["isApprove"], "Approve");
        assert_eq!(body["ownerId"], "u-1");
    }

    #[actix_rt::test]
    async fn set_user_active_rejects_an_unparsable_flag() {
        let mut moderation = MockModerationCommand::new();
        moderation.expect_set_user_active().times(0);

        let response = send(
            state_with_moderation(moderation),
            actix_test::TestRequest::patch().uri("/api/v1/admin/users/u-1/active/maybe"),
        )
        .await;

        assert_eq!(response.status(), 400);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["details"]["field"], "active");
    }

    #[actix_rt::test]
    async fn set_user_active_returns_the_updated_user() {
        let mut moderation = MockModerationCommand::new();
        moderation
            .expect_set_user_active()
            .times(1)
            .withf(|id, active| id.as_str() == "u-1" && !*active)
            .return_once(|_, _| Ok(sample_user("u-1", false)));

        let response = send(
            state_with_moderation(moderation),
            actix_test::TestRequest::patch().uri("/api/v1/admin/users/u-1/active/false"),
        )
        .await;

        assert_eq!(response.status(), 200);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["isActive"], false);
        assert_eq!(body["blocked"], true);
    }

    #[actix_rt::test]
    async fn storage_faults_surface_as_503_not_400() {
        let mut moderation = MockModerationCommand::new();
        moderation
            .expect_set_user_active()
            .times(1)
            .return_once(|_, _| Err(Error::service_unavailable("user repository unavailable")));

        let response = send(
            state_with_moderation(moderation),
            actix_test::TestRequest::patch().uri("/api/v1/admin/users/u-1/active/true"),
        )
        .await;

        assert_eq!(response.status(), 503);
    }
}
