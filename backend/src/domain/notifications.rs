//! Notification and messaging-channel template catalog.
//!
//! Templates are immutable and selected, never mutated. The catalog is keyed
//! by [`NotificationEvent`] so adding an outcome without wiring its templates
//! is a compile error rather than a silently skipped branch.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Moderation outcome that triggers a cross-channel notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum NotificationEvent {
    /// A vehicle registration request was approved.
    VehicleApproved,
    /// A vehicle registration request was rejected.
    VehicleRejected,
    /// A user account was deactivated by an administrator.
    UserBlocked,
    /// A user account was reactivated by an administrator.
    UserUnblocked,
}

/// Push notification payload template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationTemplate {
    /// Notification title shown by the client.
    pub title: String,
    /// Notification body text.
    pub body: String,
    /// Routing key the client app uses to deep-link the notification.
    pub event: NotificationEvent,
}

/// Messaging-channel text template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageTemplate {
    /// Message text sent over the messaging channel.
    pub text: String,
}

/// A push template and its messaging-channel counterpart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatePair {
    /// Push channel payload.
    pub notification: NotificationTemplate,
    /// Messaging channel payload.
    pub message: MessageTemplate,
}

impl NotificationEvent {
    /// Look up the template pair for this outcome.
    #[must_use]
    pub fn templates(self) -> TemplatePair {
        let (title, body, text) = match self {
            Self::VehicleApproved => (
                "Vehicle approved",
                "Your vehicle registration request has been approved. You can start accepting rides now.",
                "Good news! Your vehicle registration request has been approved by the admin team. You can start accepting rides now.",
            ),
            Self::VehicleRejected => (
                "Vehicle rejected",
                "Your vehicle registration request has been rejected. Please review your documents and resubmit.",
                "Unfortunately your vehicle registration request was rejected by the admin team. Please review your documents and resubmit.",
            ),
            Self::UserBlocked => (
                "Account blocked",
                "Your account has been blocked by the admin team. Contact support for assistance.",
                "Your account has been blocked by the admin team. Please contact support for assistance.",
            ),
            Self::UserUnblocked => (
                "Account unblocked",
                "Your account has been unblocked. Welcome back!",
                "Your account has been unblocked by the admin team. Welcome back!",
            ),
        };
        TemplatePair {
            notification: NotificationTemplate {
                title: title.to_owned(),
                body: body.to_owned(),
                event: self,
            },
            message: MessageTemplate {
                text: text.to_owned(),
            },
        }
    }
}
