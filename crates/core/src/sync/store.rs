//! The Event Synchronization Store.
//!
//! Single authoritative in-memory cache of server-pushed domain state,
//! reconciled against out-of-order push notifications and exposed to many
//! independent subscribers.
//!
//! # Design Rules
//!
//! - `apply()` never panics and never returns an error past the store
//!   boundary; rejections are logged and the snapshot is left untouched.
//! - Stale deliveries (revision/timestamp not exceeding the held value) are
//!   silent no-ops, expected under at-least-once transports.
//! - Subscriber callbacks run outside the state lock, on a cloned slice
//!   snapshot, so a callback may read the store without deadlocking.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, warn};
use serde_json::Value;
use uuid::Uuid;

use crate::dashboard::DashboardStats;
use crate::errors::{Result, SyncError};
use crate::events::{DomainEvent, EventDelete, EventUpsert};
use crate::preferences::{TagPreference, TagValue};
use crate::sync::push_event::PushEvent;

/// One of the three independently subscribable state partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slice {
    Events,
    Stats,
    Preferences,
}

/// Read-only view of one slice, as handed to subscribers.
#[derive(Debug, Clone, PartialEq)]
pub enum SliceSnapshot {
    Events(Vec<DomainEvent>),
    Stats(Option<DashboardStats>),
    Preferences(Vec<TagPreference>),
}

/// Cancellation handle returned by [`SyncStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle(Uuid);

type Callback = Arc<dyn Fn(&SliceSnapshot) + Send + Sync>;

struct Subscriber {
    slice: Slice,
    callback: Callback,
}

#[derive(Default)]
struct StoreState {
    events: BTreeMap<String, DomainEvent>,
    stats: Option<DashboardStats>,
    // Keyed by tag id, so the one-preference-per-tag invariant holds by
    // construction.
    preferences: BTreeMap<String, TagValue>,
}

/// In-memory cache of server-pushed domain state.
///
/// Shared as `Arc<SyncStore>`; all methods take `&self` and are synchronous.
/// The transport delivers pushes serially, the internal lock only guards
/// against concurrent reads during dispatch.
#[derive(Default)]
pub struct SyncStore {
    state: RwLock<StoreState>,
    subscribers: RwLock<HashMap<SubscriptionHandle, Subscriber>>,
}

impl SyncStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a raw push notification as delivered by the transport.
    ///
    /// Never panics and never returns an error: malformed payloads and
    /// unknown event names are logged and dropped, so a bad push cannot
    /// break a subscriber's render path.
    pub fn apply(&self, name: &str, payload: Value) {
        match PushEvent::from_raw(name, payload) {
            Ok(event) => self.apply_event(event),
            Err(err) => warn!("{}", err),
        }
    }

    /// Applies an already-parsed push event.
    pub fn apply_event(&self, event: PushEvent) {
        let applied = match event {
            PushEvent::EventCreated(upsert) => self.apply_upsert(upsert, true),
            PushEvent::EventUpdated(upsert) => self.apply_upsert(upsert, false),
            PushEvent::EventDeleted(delete) => self.apply_delete(&delete),
            PushEvent::DashboardStatsUpdated(stats) => self.apply_stats(stats),
            PushEvent::PreferenceUpdated(preference) => Ok(self.upsert_preference(preference)),
        };

        match applied {
            Ok(Some(slice)) => self.notify(slice),
            Ok(None) => {}
            Err(err @ SyncError::StaleUpdate { .. }) => debug!("{}", err),
            Err(err) => warn!("{}", err),
        }
    }

    /// Registers interest in one slice.
    ///
    /// The callback fires synchronously once with the current slice value
    /// before this returns, then on every accepted mutation of that slice.
    pub fn subscribe<F>(&self, slice: Slice, callback: F) -> SubscriptionHandle
    where
        F: Fn(&SliceSnapshot) + Send + Sync + 'static,
    {
        let callback: Callback = Arc::new(callback);
        callback(&self.snapshot(slice));

        let handle = SubscriptionHandle(Uuid::new_v4());
        self.write_subscribers()
            .insert(handle, Subscriber { slice, callback });
        handle
    }

    /// Cancels a subscription. Idempotent: unknown or already-cancelled
    /// handles are a no-op. Once this returns, no further callback begins.
    pub fn unsubscribe(&self, handle: SubscriptionHandle) {
        self.write_subscribers().remove(&handle);
    }

    /// Synchronous read of one slice. Never blocks on I/O, never fails.
    pub fn snapshot(&self, slice: Slice) -> SliceSnapshot {
        let state = self.read_state();
        match slice {
            Slice::Events => SliceSnapshot::Events(state.events.values().cloned().collect()),
            Slice::Stats => SliceSnapshot::Stats(state.stats.clone()),
            Slice::Preferences => SliceSnapshot::Preferences(collect_preferences(&state)),
        }
    }

    /// All cached events, ordered by id.
    pub fn get_events(&self) -> Vec<DomainEvent> {
        self.read_state().events.values().cloned().collect()
    }

    /// A single cached event by id.
    pub fn get_event(&self, id: &str) -> Option<DomainEvent> {
        self.read_state().events.get(id).cloned()
    }

    /// The latest accepted stats snapshot, if any has arrived yet.
    pub fn get_stats(&self) -> Option<DashboardStats> {
        self.read_state().stats.clone()
    }

    /// All tag preferences, ordered by tag id.
    pub fn get_preferences(&self) -> Vec<TagPreference> {
        collect_preferences(&self.read_state())
    }

    /// Local optimistic preference mutation (overwrite on existing tag id).
    ///
    /// Persistence belongs to the external preference API collaborator; the
    /// store only keeps the local view and notifies preference subscribers.
    pub fn set_preference(&self, tag_id: impl Into<String>, value: TagValue) {
        self.write_state().preferences.insert(tag_id.into(), value);
        self.notify(Slice::Preferences);
    }

    fn apply_upsert(&self, upsert: EventUpsert, is_create: bool) -> Result<Option<Slice>> {
        let mut state = self.write_state();
        let existing = state.events.get(&upsert.id).cloned();

        match &existing {
            Some(held) => {
                // Last-writer-wins by revision, not by arrival order.
                if upsert.revision <= held.revision {
                    return Err(SyncError::StaleUpdate {
                        entity: format!("event {}", upsert.id),
                        reason: format!(
                            "revision {} does not exceed held {}",
                            upsert.revision, held.revision
                        ),
                    });
                }
            }
            None if !is_create => {
                // A delete stays authoritative until a later create
                // reintroduces the id; an update alone cannot resurrect it.
                debug!("Ignoring update for absent event {}", upsert.id);
                return Ok(None);
            }
            None => {}
        }

        let event = upsert.into_event(existing.as_ref());
        state.events.insert(event.id.clone(), event);
        Ok(Some(Slice::Events))
    }

    fn apply_delete(&self, delete: &EventDelete) -> Result<Option<Slice>> {
        // Terminal regardless of revision skew; held revision state is
        // forgotten along with the entry.
        let removed = self.write_state().events.remove(&delete.id);
        if removed.is_some() {
            Ok(Some(Slice::Events))
        } else {
            debug!("Delete for unknown event {} ignored", delete.id);
            Ok(None)
        }
    }

    fn apply_stats(&self, stats: DashboardStats) -> Result<Option<Slice>> {
        let mut state = self.write_state();
        if let Some(held) = &state.stats {
            // A duplicate with an identical timestamp is stale too: it must
            // not replace the snapshot or wake subscribers again.
            if stats.timestamp <= held.timestamp {
                return Err(SyncError::StaleUpdate {
                    entity: "dashboard stats".to_string(),
                    reason: format!(
                        "timestamp {} does not exceed held {}",
                        stats.timestamp, held.timestamp
                    ),
                });
            }
        }
        state.stats = Some(stats);
        Ok(Some(Slice::Stats))
    }

    fn upsert_preference(&self, preference: TagPreference) -> Option<Slice> {
        self.write_state()
            .preferences
            .insert(preference.tag_id, preference.value);
        Some(Slice::Preferences)
    }

    fn notify(&self, slice: Slice) {
        let snapshot = self.snapshot(slice);
        let targets: Vec<(SubscriptionHandle, Callback)> = {
            let subscribers = self.read_subscribers();
            subscribers
                .iter()
                .filter(|(_, subscriber)| subscriber.slice == slice)
                .map(|(handle, subscriber)| (*handle, Arc::clone(&subscriber.callback)))
                .collect()
        };

        for (handle, callback) in targets {
            // Re-check registration: a handle cancelled after the dispatch
            // list was captured must not be called back.
            if self.read_subscribers().contains_key(&handle) {
                callback(&snapshot);
            }
        }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_subscribers(&self) -> RwLockReadGuard<'_, HashMap<SubscriptionHandle, Subscriber>> {
        self.subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_subscribers(&self) -> RwLockWriteGuard<'_, HashMap<SubscriptionHandle, Subscriber>> {
        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

fn collect_preferences(state: &StoreState) -> Vec<TagPreference> {
    state
        .preferences
        .iter()
        .map(|(tag_id, value)| TagPreference {
            tag_id: tag_id.clone(),
            value: value.clone(),
        })
        .collect()
}
