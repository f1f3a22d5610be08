//! Shared builders for domain unit tests.

use chrono::Utc;

use super::{ApprovalStatus, User, UserId, UserRole, VehicleId, VehicleRecord};

/// Build a user with plausible profile fields.
///
/// # Panics
/// Panics when `id` fails identifier validation.
pub(crate) fn sample_user(id: &str, active: bool) -> User {
    let now = Utc::now();
    User {
        id: UserId::new(id).expect("valid user id"),
        name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        mobile_number: "+447700900001".to_owned(),
        role: UserRole::VehicleOwner,
        is_active: active,
        blocked: !active,
        created_at: now,
        updated_at: now,
    }
}

/// Build a pending vehicle registration owned by `owner`.
///
/// # Panics
/// Panics when either identifier fails validation.
pub(crate) fn sample_vehicle(id: &str, owner: &str) -> VehicleRecord {
    let now = Utc::now();
    VehicleRecord {
        id: VehicleId::new(id).expect("valid vehicle id"),
        owner_id: UserId::new(owner).expect("valid owner id"),
        approval: ApprovalStatus::Pending,
        plate_number: "KA01AB1234".to_owned(),
        model: "Toyota Prius".to_owned(),
        created_at: now,
        updated_at: now,
    }
}
