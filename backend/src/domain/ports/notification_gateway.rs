//! Transport port for push notifications and messaging-channel sends.
//!
//! The concrete transport (push provider, messaging provider) lives behind
//! this port. Callers above the dispatcher never see its errors; the
//! dispatcher absorbs them and reports through its own side channel.

use async_trait::async_trait;

use crate::domain::notifications::{MessageTemplate, NotificationTemplate};
use crate::domain::UserId;

use super::define_port_error;

define_port_error! {
    /// Errors raised by notification transport adapters.
    pub enum NotificationGatewayError {
        /// The transport could not be reached.
        Transport { message: String } =>
            "notification transport failed: {message}",
        /// The transport refused the payload or recipient.
        Rejected { recipient: String, message: String } =>
            "notification rejected for {recipient}: {message}",
    }
}

/// Port for the push and messaging channels.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    /// Send one push notification to every listed recipient.
    async fn send_push(
        &self,
        recipients: &[UserId],
        notification: &NotificationTemplate,
    ) -> Result<(), NotificationGatewayError>;

    /// Send a messaging-channel message to a single recipient.
    async fn send_message(
        &self,
        recipient: &UserId,
        message: &MessageTemplate,
    ) -> Result<(), NotificationGatewayError>;
}

/// Fixture gateway that accepts every send without delivering anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureNotificationGateway;

#[async_trait]
impl NotificationGateway for FixtureNotificationGateway {
    async fn send_push(
        &self,
        _recipients: &[UserId],
        _notification: &NotificationTemplate,
    ) -> Result<(), NotificationGatewayError> {
        Ok(())
    }

    async fn send_message(
        &self,
        _recipient: &UserId,
        _message: &MessageTemplate,
    ) -> Result<(), NotificationGatewayError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::notifications::NotificationEvent;
    use rstest::rstest;

    #[tokio::test]
    async fn fixture_gateway_accepts_both_channels() {
        let gateway = FixtureNotificationGateway;
        let recipient = UserId::new("u-1").expect("valid id");
        let pair = NotificationEvent::VehicleApproved.templates();

        gateway
            .send_push(std::slice::from_ref(&recipient), &pair.notification)
            .await
            .expect("push accepted");
        gateway
            .send_message(&recipient, &pair.message)
            .await
            .expect("message accepted");
    }

    #[rstest]
    fn rejected_error_names_the_recipient() {
        let err = NotificationGatewayError::rejected("u-1", "unknown device token");
        assert_eq!(
            err.to_string(),
            "notification rejected for u-1: unknown device token"
        );
    }
}
