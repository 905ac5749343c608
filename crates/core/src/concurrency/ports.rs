//! Port interfaces for the guarded edit flow
//!
//! These traits define the boundaries between the edit service and the
//! infrastructure that stores events and shows notifications.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use talentbook_domain::{EventChanges, Result, StoredEvent};

use super::ConflictNotice;

/// Trait for reading and writing calendar event rows
#[async_trait]
pub trait CalendarEventStore: Send + Sync {
    /// Fetch the current row, including its `updated_at`
    async fn fetch_event(&self, id: &str) -> Result<Option<StoredEvent>>;

    /// Apply `changes` unconditionally and return the stored row
    async fn update_event(&self, id: &str, changes: &EventChanges) -> Result<StoredEvent>;

    /// Apply `changes` only while the stored `updated_at` is at or before
    /// `since`, in the same request as the write.
    ///
    /// `None` means no row matched (it moved on or is gone); nothing was written.
    async fn update_event_if_unchanged(
        &self,
        id: &str,
        changes: &EventChanges,
        since: DateTime<Utc>,
    ) -> Result<Option<StoredEvent>>;
}

/// Trait for raising a user-visible conflict notification
pub trait ConflictNotifier: Send + Sync {
    fn notify(&self, notice: &ConflictNotice);
}
