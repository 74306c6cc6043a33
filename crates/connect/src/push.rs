//! Push transport sink and dispatch worker.
//!
//! The transport owns the connection, reconnects, and timeouts; all it hands
//! us is `(name, payload)` pairs. Those go through an unbounded mpsc channel
//! whose worker forwards them to the synchronization store strictly in
//! delivery order. The store's revision checks make the effective state
//! order-independent, so no reordering or debouncing happens here.

use std::sync::Arc;

use log::{error, info};
use serde_json::Value;
use tokio::sync::mpsc;

use eventboard_core::SyncStore;

/// A raw push notification as delivered by the transport.
#[derive(Debug, Clone)]
pub struct PushMessage {
    pub name: String,
    pub payload: Value,
}

/// Sending half of the push pipeline, handed to the transport.
///
/// `deliver()` is fast and non-blocking; failure to enqueue must not affect
/// the transport (best-effort, logged).
pub struct PushSink {
    sender: mpsc::UnboundedSender<PushMessage>,
}

impl PushSink {
    /// Creates the sink along with the receiver for the dispatch worker.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<PushMessage>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    /// Enqueues one push notification.
    pub fn deliver(&self, name: impl Into<String>, payload: Value) {
        let message = PushMessage {
            name: name.into(),
            payload,
        };
        if let Err(e) = self.sender.send(message) {
            error!("Failed to enqueue push notification: {}", e);
        }
    }
}

/// Forwards queued push notifications to the store until the channel closes.
///
/// Spawn this on the runtime next to the transport:
///
/// ```ignore
/// let (sink, receiver) = PushSink::new();
/// tokio::spawn(push_dispatch_worker(receiver, Arc::clone(&store)));
/// ```
pub async fn push_dispatch_worker(
    mut receiver: mpsc::UnboundedReceiver<PushMessage>,
    store: Arc<SyncStore>,
) {
    while let Some(message) = receiver.recv().await {
        store.apply(&message.name, message.payload);
    }
    info!("Push dispatch worker shutting down");
}
