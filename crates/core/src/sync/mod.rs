pub mod push_event;
pub mod store;

pub use push_event::{
    PushEvent, DASHBOARD_STATS_UPDATED, EVENT_CREATED, EVENT_DELETED, EVENT_UPDATED,
    PREFERENCE_UPDATED,
};
pub use store::{Slice, SliceSnapshot, SubscriptionHandle, SyncStore};
