//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports ([`UsersAdminQuery`], [`ModerationCommand`]) are implemented
//! by domain services and consumed by inbound adapters. Driven ports
//! ([`UserRepository`], [`VehicleRepository`], [`NotificationGateway`]) are
//! implemented by outbound adapters and expose strongly typed errors so
//! adapters map their failures into predictable variants.

mod macros;
pub(crate) use macros::define_port_error;

mod moderation_command;
mod notification_gateway;
mod user_repository;
mod users_admin_query;
mod vehicle_repository;

#[cfg(test)]
pub use moderation_command::MockModerationCommand;
pub use moderation_command::{FixtureModerationCommand, ModerationCommand};
#[cfg(test)]
pub use notification_gateway::MockNotificationGateway;
pub use notification_gateway::{
    FixtureNotificationGateway, NotificationGateway, NotificationGatewayError,
};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{FixtureUserRepository, UserRepository, UserRepositoryError};
#[cfg(test)]
pub use users_admin_query::MockUsersAdminQuery;
pub use users_admin_query::{
    FixtureUsersAdminQuery, ListUsersRequest, UserPage, UsersAdminQuery,
};
#[cfg(test)]
pub use vehicle_repository::MockVehicleRepository;
pub use vehicle_repository::{FixtureVehicleRepository, VehicleRepository, VehicleRepositoryError};
