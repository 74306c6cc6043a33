//! Error types for the external preference API collaborator.

use thiserror::Error;

/// Failures surfaced by a `PreferenceApi` implementation.
///
/// Transport failures belong to the collaborator, never to the
/// synchronization store; these errors are kept string-wrapped so the core
/// stays agnostic of the HTTP client in use.
#[derive(Error, Debug)]
pub enum PreferenceApiError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),
}
