use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use talentbook_core::calendar_ports::{CalendarScope, CalendarViewReader};
use talentbook_core::{CalendarEventStore, ConflictNotice, ConflictNotifier};
use talentbook_domain::{
    CalendarEvent, EventChanges, Result as DomainResult, StoredEvent, TalentBookError,
    UpcomingEvent,
};

/// In-memory mock for `CalendarEventStore`.
///
/// Every write advances the row's `updated_at` by one second, like a
/// database trigger would.
#[derive(Default, Clone)]
pub struct MockCalendarEventStore {
    rows: Arc<Mutex<HashMap<String, StoredEvent>>>,
    writes: Arc<AtomicUsize>,
    pending_touch: Arc<Mutex<Option<DateTime<Utc>>>>,
}

impl MockCalendarEventStore {
    pub fn with_row(self, id: &str, updated_at: Option<DateTime<Utc>>, event: CalendarEvent) -> Self {
        self.rows
            .lock()
            .unwrap()
            .insert(id.to_string(), StoredEvent { id: id.to_string(), updated_at, event });
        self
    }

    /// Simulate a write by another user.
    pub fn touch(&self, id: &str, updated_at: DateTime<Utc>) {
        if let Some(row) = self.rows.lock().unwrap().get_mut(id) {
            row.updated_at = Some(updated_at);
        }
    }

    /// Simulate another user writing after the next read, right before the
    /// next guarded write lands.
    pub fn touch_before_next_write(&self, updated_at: DateTime<Utc>) {
        *self.pending_touch.lock().unwrap() = Some(updated_at);
    }

    pub fn row(&self, id: &str) -> Option<StoredEvent> {
        self.rows.lock().unwrap().get(id).cloned()
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CalendarEventStore for MockCalendarEventStore {
    async fn fetch_event(&self, id: &str) -> DomainResult<Option<StoredEvent>> {
        Ok(self.row(id))
    }

    async fn update_event(&self, id: &str, changes: &EventChanges) -> DomainResult<StoredEvent> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .get_mut(id)
            .ok_or_else(|| TalentBookError::NotFound(format!("calendar event {id}")))?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(apply(row, changes))
    }

    async fn update_event_if_unchanged(
        &self,
        id: &str,
        changes: &EventChanges,
        since: DateTime<Utc>,
    ) -> DomainResult<Option<StoredEvent>> {
        let pending = self.pending_touch.lock().unwrap().take();
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.get_mut(id) else {
            return Ok(None);
        };
        if let Some(updated_at) = pending {
            row.updated_at = Some(updated_at);
        }
        // NULL never matches a `lte` filter
        match row.updated_at {
            Some(current) if current <= since => {
                self.writes.fetch_add(1, Ordering::SeqCst);
                Ok(Some(apply(row, changes)))
            }
            _ => Ok(None),
        }
    }
}

fn apply(row: &mut StoredEvent, changes: &EventChanges) -> StoredEvent {
    if let Some(title) = &changes.event_title {
        row.event.event_title = title.clone();
    }
    if let Some(status) = changes.status {
        row.event.status = status;
    }
    if let Some(start) = changes.start_date {
        row.event.start_date = start;
    }
    if let Some(end) = changes.end_date {
        row.event.end_date = end;
    }
    if let Some(notes) = &changes.notes {
        row.event.notes = Some(notes.clone());
    }
    row.updated_at = Some(row.updated_at.map_or_else(Utc::now, |ts| ts + Duration::seconds(1)));
    row.clone()
}

/// Notifier that keeps every notice it was handed.
#[derive(Default, Clone)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<ConflictNotice>>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<ConflictNotice> {
        self.notices.lock().unwrap().clone()
    }
}

impl ConflictNotifier for RecordingNotifier {
    fn notify(&self, notice: &ConflictNotice) {
        self.notices.lock().unwrap().push(notice.clone());
    }
}

/// In-memory mock for `CalendarViewReader`, holding one list per scope.
#[derive(Default, Clone)]
pub struct MockCalendarViewReader {
    business: Vec<UpcomingEvent>,
    talent: Vec<UpcomingEvent>,
}

impl MockCalendarViewReader {
    pub fn new(business: Vec<UpcomingEvent>, talent: Vec<UpcomingEvent>) -> Self {
        Self { business, talent }
    }
}

#[async_trait]
impl CalendarViewReader for MockCalendarViewReader {
    async fn next_event(
        &self,
        scope: CalendarScope,
        from: DateTime<Utc>,
    ) -> DomainResult<Option<UpcomingEvent>> {
        let rows = match scope {
            CalendarScope::Business => &self.business,
            CalendarScope::Talent => &self.talent,
        };
        Ok(rows.iter().filter(|e| e.start_at >= from).min_by_key(|e| e.start_at).cloned())
    }
}
