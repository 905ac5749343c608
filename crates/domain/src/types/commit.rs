//! Weekend-matrix bulk commit types
//!
//! A `CommitBatch` is built once per import action and sent as a single
//! request body. The response comes back from the remote function verbatim.

use serde::{Deserialize, Serialize};

use super::calendar::CalendarEvent;
use crate::errors::{Result, TalentBookError};
use crate::impl_wire_name_conversions;

/// How the remote function reconciles the batch against the year's events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitMode {
    /// Create or update listed events; leave everything else untouched.
    Merge,
    /// Listed events become the full set for the talent/year scope.
    Replace,
}

impl_wire_name_conversions!(CommitMode {
    Merge => "merge",
    Replace => "replace",
});

/// Request body of the weekend-matrix commit function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitBatch {
    pub talent_id: String,
    pub year: i32,
    pub mode: CommitMode,
    pub events: Vec<CalendarEvent>,
}

impl CommitBatch {
    pub fn new(
        talent_id: impl Into<String>,
        year: i32,
        mode: CommitMode,
        events: Vec<CalendarEvent>,
    ) -> Self {
        Self { talent_id: talent_id.into(), year, mode, events }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Check every event's date range. Ownership and year scoping are left to
    /// the remote function.
    ///
    /// # Errors
    ///
    /// Returns the first [`TalentBookError::InvalidInput`] found, prefixed
    /// with the event's position in the batch.
    pub fn validate(&self) -> Result<()> {
        for (index, event) in self.events.iter().enumerate() {
            event.validate().map_err(|err| match err {
                TalentBookError::InvalidInput(msg) => {
                    TalentBookError::InvalidInput(format!("events[{index}]: {msg}"))
                }
                other => other,
            })?;
        }
        Ok(())
    }
}

/// Per-record outcome counts reported by the remote function
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitCounts {
    #[serde(default)]
    pub created: u32,
    #[serde(default)]
    pub updated: u32,
    #[serde(default)]
    pub skipped: u32,
    #[serde(default)]
    pub failed: u32,
}

impl CommitCounts {
    /// Sum of all outcomes. Equals the batch size for a well-behaved remote
    /// when `ok` is true; nothing on this side enforces it.
    pub fn total(&self) -> u64 {
        [self.created, self.updated, self.skipped, self.failed].into_iter().map(u64::from).sum()
    }
}

/// Response of the weekend-matrix commit function, passed through unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitResponse {
    pub ok: bool,
    #[serde(default)]
    pub counts: CommitCounts,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}
