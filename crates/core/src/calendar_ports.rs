//! Calendar read-view port interfaces
//!
//! The business and talent calendar views are read-only projections ordered
//! by `start_at`; row visibility is decided server-side by the caller's
//! identity.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use talentbook_domain::{Result, UpcomingEvent};

/// Which projection to read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarScope {
    /// Every talent the signed-in business manages
    Business,
    /// The signed-in talent's own calendar
    Talent,
}

/// Trait for reading the calendar views
#[async_trait]
pub trait CalendarViewReader: Send + Sync {
    /// First event in `scope` starting at or after `from`
    async fn next_event(
        &self,
        scope: CalendarScope,
        from: DateTime<Utc>,
    ) -> Result<Option<UpcomingEvent>>;
}

/// "Next upcoming event" queries for dashboards
pub struct UpcomingEventsService {
    reader: Arc<dyn CalendarViewReader>,
}

impl UpcomingEventsService {
    pub fn new(reader: Arc<dyn CalendarViewReader>) -> Self {
        Self { reader }
    }

    pub async fn next_business_event(&self, now: DateTime<Utc>) -> Result<Option<UpcomingEvent>> {
        self.reader.next_event(CalendarScope::Business, now).await
    }

    pub async fn next_talent_event(&self, now: DateTime<Utc>) -> Result<Option<UpcomingEvent>> {
        self.reader.next_event(CalendarScope::Talent, now).await
    }
}
