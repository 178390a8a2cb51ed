//! Session event bus
//!
//! Process-wide broadcast of session lifecycle signals. A `SessionExpired`
//! broadcast triggers forced logout in whatever component observes it; a
//! `LoggedIn` broadcast is the in-process half of the cross-window
//! master-data reload signal (the durable half is the storage generation
//! stamp, see `pharma_client::SessionStorage`).

use tokio::sync::broadcast;

/// Session lifecycle event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A new token pair was written (login or token refresh)
    LoggedIn,
    /// The user logged out explicitly
    LoggedOut,
    /// The session token was rejected mid-session
    SessionExpired,
}

/// Broadcast bus for session events
///
/// Delivery is best-effort: receivers that lag are allowed to miss events,
/// and publishing with zero receivers is not an error.
#[derive(Debug, Clone)]
pub struct SessionEvents {
    sender: broadcast::Sender<SessionEvent>,
}

impl SessionEvents {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(16);
        Self { sender }
    }

    /// Subscribe to session events
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.sender.subscribe()
    }

    /// Publish an event to all current subscribers
    pub fn publish(&self, event: SessionEvent) {
        let receivers = self.sender.receiver_count();
        if let Err(err) = self.sender.send(event.clone()) {
            tracing::debug!(?err, "No session event receivers");
        } else {
            tracing::debug!(?event, receivers, "Session event published");
        }
    }
}

impl Default for SessionEvents {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_publish_and_receive() {
        let events = SessionEvents::new();
        let mut rx = events.subscribe();

        events.publish(SessionEvent::LoggedIn);
        events.publish(SessionEvent::SessionExpired);

        assert_eq!(rx.recv().await.unwrap(), SessionEvent::LoggedIn);
        assert_eq!(rx.recv().await.unwrap(), SessionEvent::SessionExpired);
    }

    #[tokio::test]
    async fn test_publish_without_receivers_is_not_an_error() {
        let events = SessionEvents::new();
        events.publish(SessionEvent::LoggedOut);
    }
}
