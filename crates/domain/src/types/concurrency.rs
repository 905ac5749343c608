//! Edit snapshot captured for optimistic concurrency checks

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Version of a record as the client saw it when an edit began
///
/// Lives until the edit is written or a conflict on it is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditSnapshot {
    pub id: String,
    /// Server-assigned `updated_at` at edit start; `None` if the row had none.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl EditSnapshot {
    pub fn new(id: impl Into<String>, updated_at: Option<DateTime<Utc>>) -> Self {
        Self { id: id.into(), updated_at }
    }
}
