//! Next-upcoming-event queries over the calendar views.

mod support;

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use support::calendar::MockCalendarViewReader;
use talentbook_core::UpcomingEventsService;
use talentbook_domain::UpcomingEvent;

fn upcoming(id: &str, start_at: chrono::DateTime<Utc>) -> UpcomingEvent {
    UpcomingEvent {
        id: id.into(),
        talent_id: Some("t1".into()),
        talent_name: None,
        event_title: Some(format!("event {id}")),
        status: None,
        start_at,
        end_at: None,
        venue_name: None,
        city: None,
        timezone: None,
    }
}

#[tokio::test]
async fn picks_earliest_event_not_before_now() {
    let now = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
    let reader = MockCalendarViewReader::new(
        vec![
            upcoming("past", now - Duration::days(1)),
            upcoming("later", now + Duration::days(10)),
            upcoming("soon", now + Duration::days(2)),
        ],
        vec![],
    );
    let service = UpcomingEventsService::new(Arc::new(reader));

    let next = service.next_business_event(now).await.unwrap();
    assert_eq!(next.map(|e| e.id), Some("soon".to_string()));

    assert_eq!(service.next_talent_event(now).await.unwrap(), None);
}
