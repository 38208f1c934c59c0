use serde::{Deserialize, Serialize};

/// Authenticated-user payload held by the user module.
///
/// Replaced wholesale when a fetch completes, never mutated field by field.
/// The default value (empty username, no name parts, no groups) is what the
/// store holds before the first load.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub groups: Vec<String>,
}
