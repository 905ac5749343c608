//! Shared test helpers for `talentbook-core` integration tests.
//!
//! In-memory port doubles so the edit and commit tests can focus on
//! behaviour instead of boilerplate.
#![allow(dead_code)]

pub mod calendar;
pub mod functions;
pub mod session;

use chrono::NaiveDate;
use talentbook_domain::{CalendarEvent, EventStatus};

/// Parse a `YYYY-MM-DD` literal.
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date literal")
}

/// The booked convention event used across scenarios.
pub fn con_a() -> CalendarEvent {
    CalendarEvent::new(
        "t1",
        "Con A",
        EventStatus::Booked,
        "America/Chicago",
        date("2026-03-01"),
        date("2026-03-02"),
    )
    .expect("valid event")
}
