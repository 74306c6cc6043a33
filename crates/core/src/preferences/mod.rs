pub mod preferences_errors;
pub mod preferences_model;
pub mod preferences_traits;

pub use preferences_errors::PreferenceApiError;
pub use preferences_model::{TagPreference, TagPreferenceResponse, TagValue};
pub use preferences_traits::PreferenceApi;
