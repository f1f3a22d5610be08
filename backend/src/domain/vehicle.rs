//! Vehicle registration aggregate and the approval status enumeration.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use super::UserId;

/// Opaque vehicle identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct VehicleId(String);

/// Validation errors returned when constructing [`VehicleId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VehicleIdValidationError {
    /// Identifier is empty after trimming whitespace.
    #[error("vehicle id must not be empty")]
    Empty,
    /// Identifier contains leading or trailing whitespace.
    #[error("vehicle id must not contain surrounding whitespace")]
    ContainsWhitespace,
}

impl VehicleId {
    /// Construct an identifier after validating that it is non-empty and
    /// trimmed.
    ///
    /// # Errors
    /// Returns a [`VehicleIdValidationError`] for blank or padded input.
    pub fn new(value: impl Into<String>) -> Result<Self, VehicleIdValidationError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(VehicleIdValidationError::Empty);
        }
        if raw.trim() != raw {
            return Err(VehicleIdValidationError::ContainsWhitespace);
        }
        Ok(Self(raw))
    }

    /// Borrow the underlying identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for VehicleId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Approval state of a vehicle registration request.
///
/// `Pending` is the initial state; `Approve` and `Reject` are the outcomes
/// an administrator can move a request to. Re-submitting the stored state is
/// accepted without effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ApprovalStatus {
    /// Awaiting an administrator's decision.
    Pending,
    /// Registration accepted; the owner may operate the vehicle.
    Approve,
    /// Registration declined.
    Reject,
}

/// Error returned when parsing an approval status from its wire form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown approval status: {value}")]
pub struct ParseApprovalStatusError {
    /// The rejected input.
    pub value: String,
}

impl ApprovalStatus {
    /// Wire representation used in routes and stored records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approve => "Approve",
            Self::Reject => "Reject",
        }
    }
}

impl FromStr for ApprovalStatus {
    type Err = ParseApprovalStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Pending" => Ok(Self::Pending),
            "Approve" => Ok(Self::Approve),
            "Reject" => Ok(Self::Reject),
            other => Err(ParseApprovalStatusError {
                value: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vehicle registration record as the admin surface sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    /// Opaque identifier.
    pub id: VehicleId,
    /// User who registered the vehicle and receives status notifications.
    pub owner_id: UserId,
    /// Current approval state. Kept under the storage layer's historical
    /// field name on the wire.
    #[serde(rename = "isApprove")]
    pub approval: ApprovalStatus,
    /// Registration plate.
    pub plate_number: String,
    /// Manufacturer model description.
    pub model: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl VehicleRecord {
    /// Return a copy with the approval status replaced and the update
    /// timestamp refreshed.
    #[must_use]
    pub fn with_approval(mut self, status: ApprovalStatus) -> Self {
        self.approval = status;
        self.updated_at = Utc::now();
        self
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Pending", ApprovalStatus::Pending)]
    #[case("Approve", ApprovalStatus::Approve)]
    #[case("Reject", ApprovalStatus::Reject)]
    fn approval_status_parses_wire_values(#[case] wire: &str, #[case] expected: ApprovalStatus) {
        assert_eq!(wire.parse::<ApprovalStatus>().expect("known value"), expected);
        assert_eq!(expected.as_str(), wire);
    }

    #[rstest]
    #[case("approve")]
    #[case("APPROVED")]
    #[case("bogus")]
    #[case("")]
    fn approval_status_rejects_unknown_values(#[case] wire: &str) {
        let err = wire.parse::<ApprovalStatus>().expect_err("unknown rejected");
        assert_eq!(err.value, wire);
    }

    #[rstest]
    fn vehicle_id_rejects_blank() {
        let err = VehicleId::new("  ").expect_err("blank rejected");
        assert_eq!(err, VehicleIdValidationError::Empty);
    }

    #[rstest]
    fn record_serialises_approval_under_historical_name() {
        let record = crate::domain::test_support::sample_vehicle("v-1", "u-1");
        let value = serde_json::to_value(&record).expect("serialise");
        assert_eq!(value["isApprove"], "Pending");
    }
}
