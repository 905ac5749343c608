//! Optimistic concurrency for calendar event edits
//!
//! An edit captures the record's `updated_at` when it starts. Before writing,
//! that snapshot time is compared against what the server currently holds:
//! a strictly older snapshot is a conflict, surfaced to the user with exactly
//! two ways out (reload or overwrite). Nothing is merged automatically.

pub mod notifier;
pub mod ports;
pub mod service;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::i18n::{Locale, Message};

pub use notifier::TracingConflictNotifier;
pub use service::{EventEditService, Resolved, SaveOutcome};

/// Decide whether a write based on `original` may proceed over `current`.
///
/// Returns `true` (safe to write) when either timestamp is missing, or when
/// `original >= current`. Re-submitting against the same stored version is
/// allowed; only a strictly older base is a conflict.
pub fn check_concurrency(
    original: Option<DateTime<Utc>>,
    current: Option<DateTime<Utc>>,
) -> bool {
    match (original, current) {
        (Some(original), Some(current)) => original >= current,
        _ => true,
    }
}

/// [`check_concurrency`] over raw timestamps as they come off the wire.
///
/// Absent or blank values are treated as missing. A value that is present
/// but cannot be read as an instant is a conflict: there is no way to prove
/// the snapshot is current.
pub fn check_concurrency_raw(original: Option<&str>, current: Option<&str>) -> bool {
    match (present(original), present(current)) {
        (Some(original), Some(current)) => {
            match (parse_timestamp(original), parse_timestamp(current)) {
                (Some(original), Some(current)) => original >= current,
                _ => false,
            }
        }
        _ => true,
    }
}

fn present(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|raw| !raw.is_empty())
}

/// Accepts RFC 3339, Postgres text output (`2026-03-01 11:00:00+00`),
/// offset-less datetimes (read as UTC) and bare dates (UTC midnight).
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    const WITH_OFFSET: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"];
    const NAIVE: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Some(ts) =
        WITH_OFFSET.iter().find_map(|fmt| DateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(ts.with_timezone(&Utc));
    }
    if let Some(ts) = NAIVE.iter().find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok()) {
        return Some(ts.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|ts| ts.and_utc())
}

/// The only two ways a user may resolve a conflict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictResolution {
    /// Discard the local edit and re-fetch the stored record.
    Reload,
    /// Write the local edit despite the newer stored version.
    Overwrite,
}

impl ConflictResolution {
    pub const ALL: [ConflictResolution; 2] = [Self::Reload, Self::Overwrite];

    pub fn label(self, locale: Locale) -> &'static str {
        match self {
            Self::Reload => locale.text(Message::ReloadAction),
            Self::Overwrite => locale.text(Message::OverwriteAction),
        }
    }
}

/// A detected conflict, ready to show to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictNotice {
    pub record_id: String,
    pub snapshot_updated_at: Option<DateTime<Utc>>,
    pub current_updated_at: Option<DateTime<Utc>>,
    pub locale: Locale,
    pub title: String,
    pub message: String,
}

impl ConflictNotice {
    pub fn new(
        record_id: impl Into<String>,
        snapshot_updated_at: Option<DateTime<Utc>>,
        current_updated_at: Option<DateTime<Utc>>,
        locale: Locale,
    ) -> Self {
        Self {
            record_id: record_id.into(),
            snapshot_updated_at,
            current_updated_at,
            locale,
            title: locale.text(Message::ConflictTitle).to_string(),
            message: locale.text(Message::ConflictDescription).to_string(),
        }
    }

    /// Resolution actions with their localized labels, in display order.
    pub fn actions(&self) -> [(ConflictResolution, &'static str); 2] {
        ConflictResolution::ALL.map(|action| (action, action.label(self.locale)))
    }
}
