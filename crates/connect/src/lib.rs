//! Eventboard Connect - external collaborator adapters.
//!
//! The synchronization store in `eventboard-core` owns no I/O. This crate
//! provides the two adapters it collaborates with: an HTTP client for the
//! preference API and a channel-based sink that feeds raw push notifications
//! from the transport into the store in delivery order.

pub mod config;
pub mod errors;
pub mod preferences;
pub mod push;

pub use config::ConnectConfig;
pub use errors::ConnectError;
pub use preferences::PreferenceApiClient;
pub use push::{push_dispatch_worker, PushMessage, PushSink};
