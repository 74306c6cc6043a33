//! Typed push notifications.
//!
//! The transport delivers `(name, JSON payload)` pairs. The recognized names
//! form a closed set, so they map to a tagged enum whose variants each carry
//! their own payload shape; past `PushEvent::from_raw` the payload schema is
//! enforced by the type system instead of runtime string comparison.

use serde_json::Value;

use crate::dashboard::DashboardStats;
use crate::errors::{Result, SyncError};
use crate::events::{EventDelete, EventUpsert};
use crate::preferences::TagPreference;

/// A domain event was created.
pub const EVENT_CREATED: &str = "event:created";
/// A domain event was mutated.
pub const EVENT_UPDATED: &str = "event:updated";
/// A domain event was removed.
pub const EVENT_DELETED: &str = "event:deleted";
/// A fresh dashboard statistics snapshot is available.
pub const DASHBOARD_STATS_UPDATED: &str = "dashboard:stats_updated";
/// A tag preference change was echoed back by the server.
pub const PREFERENCE_UPDATED: &str = "preference:updated";

/// A recognized push notification with its parsed payload.
#[derive(Debug, Clone, PartialEq)]
pub enum PushEvent {
    EventCreated(EventUpsert),
    EventUpdated(EventUpsert),
    EventDeleted(EventDelete),
    DashboardStatsUpdated(DashboardStats),
    PreferenceUpdated(TagPreference),
}

impl PushEvent {
    /// Parses a raw `(name, payload)` pair as delivered by the transport.
    ///
    /// An unrecognized name yields `SyncError::UnknownEvent`; a payload that
    /// does not match its event's schema yields `SyncError::MalformedPayload`
    /// with the event name and a diagnostic reason.
    pub fn from_raw(name: &str, payload: Value) -> Result<Self> {
        fn parse<T: serde::de::DeserializeOwned>(name: &str, payload: Value) -> Result<T> {
            serde_json::from_value(payload).map_err(|e| SyncError::MalformedPayload {
                event: name.to_string(),
                reason: e.to_string(),
            })
        }

        match name {
            EVENT_CREATED => Ok(Self::EventCreated(parse(name, payload)?)),
            EVENT_UPDATED => Ok(Self::EventUpdated(parse(name, payload)?)),
            EVENT_DELETED => Ok(Self::EventDeleted(parse(name, payload)?)),
            DASHBOARD_STATS_UPDATED => Ok(Self::DashboardStatsUpdated(parse(name, payload)?)),
            PREFERENCE_UPDATED => Ok(Self::PreferenceUpdated(parse(name, payload)?)),
            other => Err(SyncError::UnknownEvent(other.to_string())),
        }
    }

    /// The wire name this event arrived under.
    pub fn name(&self) -> &'static str {
        match self {
            Self::EventCreated(_) => EVENT_CREATED,
            Self::EventUpdated(_) => EVENT_UPDATED,
            Self::EventDeleted(_) => EVENT_DELETED,
            Self::DashboardStatsUpdated(_) => DASHBOARD_STATS_UPDATED,
            Self::PreferenceUpdated(_) => PREFERENCE_UPDATED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_raw_parses_each_recognized_name() {
        let created = PushEvent::from_raw(
            EVENT_CREATED,
            json!({"id": "e1", "revision": 1, "title": "Launch", "status": "scheduled"}),
        )
        .unwrap();
        assert_eq!(created.name(), EVENT_CREATED);

        let deleted = PushEvent::from_raw(EVENT_DELETED, json!({"id": "e1"})).unwrap();
        match deleted {
            PushEvent::EventDeleted(payload) => assert_eq!(payload.id, "e1"),
            other => panic!("Expected EventDeleted, got {:?}", other),
        }

        let stats = PushEvent::from_raw(
            DASHBOARD_STATS_UPDATED,
            json!({
                "totalEvents": 5,
                "activeEvents": 2,
                "upcomingEvents": 3,
                "systemHealth": "healthy",
                "timestamp": "2026-08-25T12:00:00Z"
            }),
        )
        .unwrap();
        assert_eq!(stats.name(), DASHBOARD_STATS_UPDATED);

        let preference =
            PushEvent::from_raw(PREFERENCE_UPDATED, json!({"tagId": "t1", "value": true})).unwrap();
        assert_eq!(preference.name(), PREFERENCE_UPDATED);
    }

    #[test]
    fn test_from_raw_rejects_unknown_name() {
        let result = PushEvent::from_raw("event:archived", json!({}));
        match result {
            Err(SyncError::UnknownEvent(name)) => assert_eq!(name, "event:archived"),
            other => panic!("Expected UnknownEvent, got {:?}", other),
        }
    }

    #[test]
    fn test_from_raw_rejects_missing_required_field() {
        // event:created without an id
        let result = PushEvent::from_raw(EVENT_CREATED, json!({"revision": 1, "title": "x"}));
        match result {
            Err(SyncError::MalformedPayload { event, reason }) => {
                assert_eq!(event, EVENT_CREATED);
                assert!(reason.contains("id"));
            }
            other => panic!("Expected MalformedPayload, got {:?}", other),
        }
    }

    #[test]
    fn test_from_raw_rejects_wrong_value_type() {
        let result = PushEvent::from_raw(
            EVENT_CREATED,
            json!({"id": "e1", "revision": "not-a-number"}),
        );
        assert!(matches!(result, Err(SyncError::MalformedPayload { .. })));
    }
}
