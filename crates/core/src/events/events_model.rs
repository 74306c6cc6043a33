use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A domain event as held in the client snapshot.
///
/// Owned exclusively by the synchronization store; consumers only ever see
/// cloned read-only views. The revision counter is stamped by the server on
/// every mutation and is the sole conflict-resolution key under out-of-order
/// delivery.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DomainEvent {
    pub id: String,
    pub title: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    pub revision: u64,
}

/// Wire payload for `event:created` / `event:updated` pushes.
///
/// Mutable fields are optional: an update may carry only the fields that
/// changed, and fields it omits keep their currently held value.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EventUpsert {
    pub id: String,
    pub revision: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
}

/// Wire payload for `event:deleted` pushes: carries only the identifier.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EventDelete {
    pub id: String,
}

impl EventUpsert {
    /// Materializes the full event, taking omitted fields from the
    /// currently held entry (if any).
    pub fn into_event(self, existing: Option<&DomainEvent>) -> DomainEvent {
        DomainEvent {
            id: self.id,
            title: self
                .title
                .or_else(|| existing.map(|e| e.title.clone()))
                .unwrap_or_default(),
            status: self
                .status
                .or_else(|| existing.map(|e| e.status.clone()))
                .unwrap_or_default(),
            start_time: self.start_time.or_else(|| existing.and_then(|e| e.start_time)),
            end_time: self.end_time.or_else(|| existing.and_then(|e| e.end_time)),
            revision: self.revision,
        }
    }
}
