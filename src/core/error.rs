// Centralized error handling for the store

use thiserror::Error;

/// Errors a user fetch can surface through the load action.
///
/// The store itself never fails: mutations are plain assignments and getters
/// substitute defaults for absent fields. Only the fetch port is fallible.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("User fetch timed out after {elapsed_ms}ms")]
    Timeout { elapsed_ms: u64 },

    #[error("Upstream fetch failed: {0}")]
    Upstream(String),

    #[error("Fetched user failed validation: {0}")]
    InvalidUser(String),
}
