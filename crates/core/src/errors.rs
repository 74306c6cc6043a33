//! Core error types for the Eventboard synchronization layer.
//!
//! These errors are terminal at the store boundary: `SyncStore::apply`
//! consumes them and logs, so a bad push can never break a subscriber.

use thiserror::Error;

/// Type alias for Result using our SyncError type.
pub type Result<T> = std::result::Result<T, SyncError>;

/// Rejection reasons for incoming push notifications.
#[derive(Error, Debug)]
pub enum SyncError {
    /// The payload did not match the schema for its event name
    /// (missing required field, wrong value type).
    #[error("Malformed payload for '{event}': {reason}")]
    MalformedPayload { event: String, reason: String },

    /// The incoming mutation does not exceed the currently held
    /// revision/timestamp. Expected under at-least-once delivery.
    #[error("Stale update for {entity} dropped: {reason}")]
    StaleUpdate { entity: String, reason: String },

    /// The event name is not one of the recognized push constants.
    #[error("Unknown push event name: {0}")]
    UnknownEvent(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SyncError::MalformedPayload {
            event: "event:created".to_string(),
            reason: "missing field `id`".to_string(),
        };
        assert!(err.to_string().contains("event:created"));
        assert!(err.to_string().contains("missing field `id`"));

        let err = SyncError::UnknownEvent("event:archived".to_string());
        assert_eq!(err.to_string(), "Unknown push event name: event:archived");
    }
}
