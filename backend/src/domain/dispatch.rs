//! Cross-channel notification dispatch.
//!
//! Moderation writes must never wait on, or fail because of, the push and
//! messaging transports. [`NotificationDispatch`] is the synchronous handoff
//! the services call after a durable write; [`Dispatcher`] implements it by
//! spawning a background task that performs best-effort delivery and reports
//! failures through `tracing`.

use std::sync::Arc;

use futures_util::future::join_all;
use tracing::warn;

use crate::domain::notifications::{MessageTemplate, NotificationTemplate, TemplatePair};
use crate::domain::ports::NotificationGateway;
use crate::domain::UserId;

/// One delivery order: recipients plus the per-channel payloads.
///
/// A `None` channel is skipped without being counted as a failure.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchRequest {
    /// Users the payloads are delivered to.
    pub recipients: Vec<UserId>,
    /// Push channel payload, when that channel is wanted.
    pub notification: Option<NotificationTemplate>,
    /// Messaging channel payload, when that channel is wanted.
    pub message: Option<MessageTemplate>,
}

impl DispatchRequest {
    /// Build a request delivering both channels of a catalog template pair.
    #[must_use]
    pub fn for_templates(recipients: Vec<UserId>, templates: TemplatePair) -> Self {
        Self {
            recipients,
            notification: Some(templates.notification),
            message: Some(templates.message),
        }
    }
}

/// Tally of one delivery attempt.
///
/// Failures are already logged by the time callers see this; the tally
/// exists for tests and for callers that await [`Dispatcher::deliver`]
/// directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Whether the push send failed.
    pub push_failed: bool,
    /// Number of messaging-channel sends that failed.
    pub message_failures: usize,
}

impl DispatchOutcome {
    /// Whether every attempted send succeeded.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        !self.push_failed && self.message_failures == 0
    }
}

/// Handoff point between a moderation write and notification delivery.
///
/// `enqueue` must return immediately and must never fail: the triggering
/// write has already committed, and cancelling the request that caused it
/// must not cancel delivery.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationDispatch: Send + Sync {
    /// Queue one delivery order for background processing.
    fn enqueue(&self, request: DispatchRequest);
}

/// Best-effort dispatcher over a [`NotificationGateway`].
#[derive(Debug)]
pub struct Dispatcher<G> {
    gateway: Arc<G>,
}

impl<G> Clone for Dispatcher<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
        }
    }
}

impl<G> Dispatcher<G> {
    /// Create a dispatcher delivering through the given gateway.
    #[must_use]
    pub const fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }
}

impl<G: NotificationGateway> Dispatcher<G> {
    /// Deliver one request: a single push send covering every recipient,
    /// then one messaging send per recipient.
    ///
    /// Every send is attempted regardless of earlier failures. Transport
    /// errors are logged and tallied, never returned.
    pub async fn deliver(&self, request: DispatchRequest) -> DispatchOutcome {
        let mut outcome = DispatchOutcome::default();
        if request.recipients.is_empty() {
            return outcome;
        }

        if let Some(notification) = &request.notification {
            if let Err(err) = self
                .gateway
                .send_push(&request.recipients, notification)
                .await
            {
                warn!(error = %err, recipients = request.recipients.len(), "push send failed");
                outcome.push_failed = true;
            }
        }

        if let Some(message) = &request.message {
            let sends = request
                .recipients
                .iter()
                .map(|recipient| async move {
                    self.gateway
                        .send_message(recipient, message)
                        .await
                        .map_err(|err| (recipient.clone(), err))
                });
            for result in join_all(sends).await {
                if let Err((recipient, err)) = result {
                    warn!(error = %err, recipient = %recipient, "message send failed");
                    outcome.message_failures += 1;
                }
            }
        }

        outcome
    }
}

impl<G: NotificationGateway + 'static> NotificationDispatch for Dispatcher<G> {
    fn enqueue(&self, request: DispatchRequest) {
        let dispatcher = self.clone();
        drop(tokio::spawn(async move {
            let outcome = dispatcher.deliver(request).await;
            if !outcome.is_clean() {
                warn!(
                    push_failed = outcome.push_failed,
                    message_failures = outcome.message_failures,
                    "notification delivery completed with failures"
                );
            }
        }));
    }
}
