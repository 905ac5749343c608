//! Shared helpers for infra integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use serde_json::json;
use talentbook_domain::{CalendarEvent, CommitBatch, CommitMode, EventStatus};
use wiremock::{Request, Respond, ResponseTemplate};

/// Install a test subscriber once so `RUST_LOG` works under `cargo test`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// The single booked event used by the commit scenarios.
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

type Scope = (String, i32);
type EventKey = (String, NaiveDate, NaiveDate);

/// In-memory stand-in for the remote commit function.
///
/// Events are identified by title and date range within a talent/year.
/// Identical events are `skipped`, changed ones `updated`, new ones
/// `created`. Events for another talent are `failed`. In replace mode,
/// stored events missing from the batch are dropped.
#[derive(Clone, Default)]
pub struct WeekendMatrixRemote {
    store: Arc<Mutex<HashMap<Scope, HashMap<EventKey, CalendarEvent>>>>,
}

impl WeekendMatrixRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stored(&self, talent_id: &str, year: i32) -> Vec<CalendarEvent> {
        let store = self.store.lock().expect("remote store lock");
        store
            .get(&(talent_id.to_string(), year))
            .map(|events| events.values().cloned().collect())
            .unwrap_or_default()
    }

    fn commit(&self, batch: CommitBatch) -> serde_json::Value {
        let mut store = self.store.lock().expect("remote store lock");
        let scope = store.entry((batch.talent_id.clone(), batch.year)).or_default();

        let (mut created, mut updated, mut skipped, mut failed) = (0u32, 0u32, 0u32, 0u32);
        let mut errors = Vec::new();
        let mut listed = Vec::new();

        for event in batch.events {
            if event.talent_id != batch.talent_id {
                failed += 1;
                errors.push(format!("{}: talent mismatch", event.event_title));
                continue;
            }
            let key = (event.event_title.clone(), event.start_date, event.end_date);
            listed.push(key.clone());
            match scope.get(&key) {
                Some(existing) if *existing == event => skipped += 1,
                Some(_) => {
                    updated += 1;
                    scope.insert(key, event);
                }
                None => {
                    created += 1;
                    scope.insert(key, event);
                }
            }
        }

        if batch.mode == CommitMode::Replace {
            scope.retain(|key, _| listed.contains(key));
        }

        let mut body = json!({
            "ok": failed == 0,
            "counts": { "created": created, "updated": updated, "skipped": skipped, "failed": failed }
        });
        if !errors.is_empty() {
            body["errors"] = json!(errors);
        }
        body
    }
}

impl Respond for WeekendMatrixRemote {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        match serde_json::from_slice::<CommitBatch>(&request.body) {
            Ok(batch) => ResponseTemplate::new(200).set_body_json(self.commit(batch)),
            Err(err) => ResponseTemplate::new(400)
                .set_body_json(json!({ "error": format!("invalid payload: {err}") })),
        }
    }
}
