//! Change-event fan-out to connected viewers.
//!
//! Notifications are advisory: viewers re-fetch the slot list after a
//! `refresh`, and `new_booking` is informational only. Delivery is
//! best effort, a viewer that cannot be reached is simply skipped.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Events queued per viewer before the oldest is dropped. A viewer
/// that lags this far behind recovers through the next slot-list fetch.
const CHANNEL_CAPACITY: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ChangeEvent {
    /// The slot collection changed; viewers should re-fetch it.
    Refresh,
    /// A slot was just booked. Carries display data, not state.
    NewBooking(BookingNotice),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingNotice {
    pub date: String,
    pub time: String,
    pub client_name: String,
    pub client_email: String,
}

#[derive(Debug, Clone)]
pub struct NotificationHub {
    sender: broadcast::Sender<ChangeEvent>,
}

impl NotificationHub {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Register a new viewer. Dropping the receiver unsubscribes it.
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Deliver `event` to every current viewer. Never blocks and never
    /// fails from the caller's perspective; a send without viewers only
    /// means there is nobody to tell.
    pub fn notify(&self, event: ChangeEvent) {
        let _ = self.sender.send(event);
    }
}

impl Default for NotificationHub {
    fn default() -> Self {
        Self::new()
    }
}
