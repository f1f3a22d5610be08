//! OpenAPI documentation configuration.
//!
//! Defines [`ApiDoc`], which aggregates the admin moderation endpoints and
//! their schemas. Debug builds serve the generated document as JSON under
//! `/api-docs/openapi.json`.

use utoipa::OpenApi;

use crate::domain::{ApprovalStatus, ErrorCode, User, UserRole, VehicleRecord};
use crate::domain::ports::UserPage;
use crate::inbound::http::ApiError;

/// OpenAPI document for the admin moderation API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Admin moderation API",
        description = "User lookup, filtered listing, vehicle approval, and \
                       account activation for platform administrators."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::admin_users::get_user,
        crate::inbound::http::admin_users::list_users,
        crate::inbound::http::admin_users::approve_vehicle,
        crate::inbound::http::admin_users::set_user_active,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(User, UserRole, UserPage, VehicleRecord, ApprovalStatus, ApiError, ErrorCode)),
    tags(
        (name = "admin.users", description = "User lookup, listing, and activation"),
        (name = "admin.vehicles", description = "Vehicle approval moderation"),
        (name = "health", description = "Probe endpoints")
    )
)]
pub struct ApiDoc;
