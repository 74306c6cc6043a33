pub mod events_model;

pub use events_model::{DomainEvent, EventDelete, EventUpsert};
