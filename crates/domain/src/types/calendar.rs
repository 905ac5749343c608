//! Calendar event types
//!
//! `CalendarEvent` is the wire shape of a single-day or date-range booking as
//! the backend stores it. Every event in this workflow is all-day.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::concurrency::EditSnapshot;
use crate::errors::{Result, TalentBookError};
use crate::impl_wire_name_conversions;

/// Booking status of a calendar event. Mutually exclusive, unordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Booked,
    Hold,
    Tentative,
    Available,
    Cancelled,
    NotAvailable,
}

impl_wire_name_conversions!(EventStatus {
    Booked => "booked",
    Hold => "hold",
    Tentative => "tentative",
    Available => "available",
    Cancelled => "cancelled",
    NotAvailable => "not_available",
});

fn default_all_day() -> bool {
    true
}

/// Calendar event as exchanged with the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub talent_id: String,
    pub event_title: String,
    pub status: EventStatus,
    #[serde(default = "default_all_day")]
    pub all_day: bool,
    /// IANA zone name. Informational only.
    pub timezone: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    // Pass-through fields, never validated here
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_ref: Option<String>,
}

impl CalendarEvent {
    /// Create an all-day event, rejecting ranges that end before they start.
    ///
    /// # Errors
    ///
    /// Returns [`TalentBookError::InvalidInput`] if `start_date > end_date`.
    pub fn new(
        talent_id: impl Into<String>,
        event_title: impl Into<String>,
        status: EventStatus,
        timezone: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self> {
        let event = Self {
            talent_id: talent_id.into(),
            event_title: event_title.into(),
            status,
            all_day: true,
            timezone: timezone.into(),
            start_date,
            end_date,
            venue_name: None,
            city: None,
            state: None,
            country: None,
            location: None,
            notes: None,
            source: None,
            source_ref: None,
        };
        event.validate()?;
        Ok(event)
    }

    /// Check the `start_date <= end_date` invariant.
    ///
    /// # Errors
    ///
    /// Returns [`TalentBookError::InvalidInput`] naming the event on violation.
    pub fn validate(&self) -> Result<()> {
        if self.start_date > self.end_date {
            return Err(TalentBookError::InvalidInput(format!(
                "event {:?} ends ({}) before it starts ({})",
                self.event_title, self.end_date, self.start_date
            )));
        }
        Ok(())
    }

    /// Number of calendar days covered, inclusive of both ends.
    pub fn day_count(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    pub fn with_venue(mut self, venue_name: impl Into<String>) -> Self {
        self.venue_name = Some(venue_name.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Record where the row came from (e.g. `"weekend_matrix"` plus a cell ref).
    pub fn with_source(mut self, source: impl Into<String>, source_ref: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self.source_ref = Some(source_ref.into());
        self
    }
}

/// A calendar row read back from the events table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEvent {
    pub id: String,
    /// Server-assigned last-modification time.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub event: CalendarEvent,
}

impl StoredEvent {
    /// Capture the version this row is at, for a later concurrency check.
    pub fn snapshot(&self) -> EditSnapshot {
        EditSnapshot { id: self.id.clone(), updated_at: self.updated_at }
    }
}

/// Partial update applied through the guarded edit flow
///
/// Absent fields are omitted from the request body and left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EventStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl EventChanges {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Reject a date range that is inverted when both ends are supplied.
    ///
    /// # Errors
    ///
    /// Returns [`TalentBookError::InvalidInput`] if `start_date > end_date`.
    pub fn validate(&self) -> Result<()> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) if start > end => Err(TalentBookError::InvalidInput(
                format!("end date {end} is before start date {start}"),
            )),
            _ => Ok(()),
        }
    }
}

/// Row of the business/talent calendar read views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingEvent {
    pub id: String,
    #[serde(default)]
    pub talent_id: Option<String>,
    #[serde(default)]
    pub talent_name: Option<String>,
    #[serde(default)]
    pub event_title: Option<String>,
    #[serde(default)]
    pub status: Option<EventStatus>,
    pub start_at: DateTime<Utc>,
    #[serde(default)]
    pub end_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub venue_name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn new_event_is_all_day() {
        let event = CalendarEvent::new(
            "t1",
            "Con A",
            EventStatus::Booked,
            "America/Chicago",
            date("2026-03-01"),
            date("2026-03-02"),
        )
        .unwrap();

        assert!(event.all_day);
        assert_eq!(event.day_count(), 2);
    }

    #[test]
    fn new_event_rejects_inverted_range() {
        let result = CalendarEvent::new(
            "t1",
            "Backwards",
            EventStatus::Hold,
            "UTC",
            date("2026-03-02"),
            date("2026-03-01"),
        );
        assert!(matches!(result, Err(TalentBookError::InvalidInput(_))));
    }

    #[test]
    fn single_day_event_is_valid() {
        let day = date("2026-06-13");
        let event =
            CalendarEvent::new("t1", "Signing", EventStatus::Tentative, "UTC", day, day).unwrap();
        assert_eq!(event.day_count(), 1);
    }

    #[test]
    fn serializes_to_backend_shape() {
        let event = CalendarEvent::new(
            "t1",
            "Con A",
            EventStatus::NotAvailable,
            "America/Chicago",
            date("2026-03-01"),
            date("2026-03-02"),
        )
        .unwrap()
        .with_venue("Hall B");

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(
            value,
            json!({
                "talent_id": "t1",
                "event_title": "Con A",
                "status": "not_available",
                "all_day": true,
                "timezone": "America/Chicago",
                "start_date": "2026-03-01",
                "end_date": "2026-03-02",
                "venue_name": "Hall B"
            })
        );
    }

    #[test]
    fn stored_event_reads_flattened_row_and_ignores_extra_columns() {
        let row = json!({
            "id": "evt-1",
            "updated_at": "2026-02-10T12:00:00.123456+00:00",
            "created_at": "2026-01-01T00:00:00+00:00",
            "talent_id": "t1",
            "event_title": "Con A",
            "status": "hold",
            "timezone": "UTC",
            "start_date": "2026-03-01",
            "end_date": "2026-03-01"
        });

        let stored: StoredEvent = serde_json::from_value(row).unwrap();
        assert_eq!(stored.id, "evt-1");
        assert_eq!(stored.event.status, EventStatus::Hold);
        assert!(stored.event.all_day);

        let snapshot = stored.snapshot();
        assert_eq!(snapshot.id, "evt-1");
        assert_eq!(snapshot.updated_at, stored.updated_at);
    }

    #[test]
    fn status_parses_from_wire_names() {
        assert_eq!("Booked".parse::<EventStatus>().unwrap(), EventStatus::Booked);
        assert_eq!("not_available".parse::<EventStatus>().unwrap(), EventStatus::NotAvailable);
        assert!("penciled".parse::<EventStatus>().is_err());
        assert_eq!(EventStatus::ALL.len(), 6);
    }

    #[test]
    fn changes_omit_absent_fields() {
        let changes = EventChanges {
            status: Some(EventStatus::Cancelled),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&changes).unwrap(), json!({ "status": "cancelled" }));
        assert!(!changes.is_empty());
        assert!(EventChanges::default().is_empty());
    }

    #[test]
    fn changes_validate_date_order() {
        let changes = EventChanges {
            start_date: Some(date("2026-05-02")),
            end_date: Some(date("2026-05-01")),
            ..Default::default()
        };
        assert!(changes.validate().is_err());

        let open_ended = EventChanges { start_date: Some(date("2026-05-02")), ..Default::default() };
        assert!(open_ended.validate().is_ok());
    }
}
