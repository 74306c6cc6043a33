//! Collaborator traits for tag preferences.

use async_trait::async_trait;

use crate::preferences::{PreferenceApiError, TagPreference, TagPreferenceResponse};

/// External collaborator that persists tag preferences server-side.
///
/// The synchronization store applies preference changes locally and
/// optimistically; an implementation of this trait (see the
/// `eventboard-connect` crate) is responsible for persistence and for
/// feeding back a confirmation push if the server model requires one.
#[async_trait]
pub trait PreferenceApi: Send + Sync {
    /// Persist a single preference (create or overwrite by tag id).
    async fn save_preference(
        &self,
        preference: &TagPreference,
    ) -> Result<TagPreferenceResponse, PreferenceApiError>;

    /// Fetch all stored preferences.
    async fn list_preferences(&self) -> Result<Vec<TagPreference>, PreferenceApiError>;
}
