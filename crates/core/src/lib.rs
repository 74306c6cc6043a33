//! Eventboard Core - client-side synchronization layer.
//!
//! This crate maintains a typed in-memory snapshot of server-pushed domain
//! state (events, dashboard statistics, tag preferences) and reconciles it
//! against out-of-order push delivery. Transport and persistence adapters
//! live in the `eventboard-connect` crate.

pub mod dashboard;
pub mod errors;
pub mod events;
pub mod preferences;
pub mod sync;

// Re-export the store and its subscription surface
pub use sync::{PushEvent, Slice, SliceSnapshot, SubscriptionHandle, SyncStore};

// Re-export error types
pub use errors::Result;
pub use errors::SyncError;
