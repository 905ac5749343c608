//! REST gateway adapters for calendar tables and views
//!
//! Requests carry the signed-in user's token when there is a valid session
//! and the anon key otherwise; row visibility is decided server-side.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Method;
use talentbook_core::{CalendarEventStore, CalendarScope, CalendarViewReader, SessionProvider};
use talentbook_domain::constants::{
    BUSINESS_CALENDAR_VIEW, CALENDAR_EVENTS_TABLE, TALENT_CALENDAR_VIEW,
};
use talentbook_domain::{EventChanges, Result, StoredEvent, TalentBookError, UpcomingEvent};
use tracing::{debug, instrument};

use super::client::BackendClient;

/// Table/view client for `{base}/rest/v1`
#[derive(Clone)]
pub struct RestClient {
    client: BackendClient,
    session: Arc<dyn SessionProvider>,
}

impl RestClient {
    pub fn new(client: BackendClient, session: Arc<dyn SessionProvider>) -> Self {
        Self { client, session }
    }

    async fn bearer(&self) -> Result<Option<String>> {
        Ok(self
            .session
            .session()
            .await?
            .filter(|s| s.is_valid(Utc::now()))
            .map(|s| s.access_token))
    }

    fn view_for(scope: CalendarScope) -> &'static str {
        match scope {
            CalendarScope::Business => BUSINESS_CALENDAR_VIEW,
            CalendarScope::Talent => TALENT_CALENDAR_VIEW,
        }
    }

    fn table_path(relation: &str) -> String {
        format!("/rest/v1/{relation}")
    }
}

#[async_trait]
impl CalendarViewReader for RestClient {
    #[instrument(skip(self))]
    async fn next_event(
        &self,
        scope: CalendarScope,
        from: DateTime<Utc>,
    ) -> Result<Option<UpcomingEvent>> {
        let bearer = self.bearer().await?;
        let start_filter = format!("gte.{}", from.to_rfc3339_opts(SecondsFormat::Millis, true));
        let request = self
            .client
            .request(Method::GET, &Self::table_path(Self::view_for(scope)), bearer.as_deref())
            .query(&[
                ("select", "*"),
                ("start_at", start_filter.as_str()),
                ("order", "start_at.asc"),
                ("limit", "1"),
            ]);

        let rows: Vec<UpcomingEvent> = self.client.send(request).await?;
        debug!(found = !rows.is_empty(), "next event queried");
        Ok(rows.into_iter().next())
    }
}

#[async_trait]
impl CalendarEventStore for RestClient {
    #[instrument(skip(self))]
    async fn fetch_event(&self, id: &str) -> Result<Option<StoredEvent>> {
        let bearer = self.bearer().await?;
        let id_filter = format!("eq.{id}");
        let request = self
            .client
            .request(Method::GET, &Self::table_path(CALENDAR_EVENTS_TABLE), bearer.as_deref())
            .query(&[("select", "*"), ("id", id_filter.as_str())]);

        let rows: Vec<StoredEvent> = self.client.send(request).await?;
        Ok(rows.into_iter().next())
    }

    #[instrument(skip(self, changes))]
    async fn update_event(&self, id: &str, changes: &EventChanges) -> Result<StoredEvent> {
        let bearer = self.bearer().await?;
        let id_filter = format!("eq.{id}");
        let request = self
            .client
            .request(Method::PATCH, &Self::table_path(CALENDAR_EVENTS_TABLE), bearer.as_deref())
            .query(&[("id", id_filter.as_str())])
            .header("Prefer", "return=representation")
            .json(changes);

        let rows: Vec<StoredEvent> = self.client.send(request).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| TalentBookError::NotFound(format!("calendar event {id}")))
    }

    #[instrument(skip(self, changes))]
    async fn update_event_if_unchanged(
        &self,
        id: &str,
        changes: &EventChanges,
        since: DateTime<Utc>,
    ) -> Result<Option<StoredEvent>> {
        let bearer = self.bearer().await?;
        let id_filter = format!("eq.{id}");
        let version_filter = format!("lte.{}", since.to_rfc3339_opts(SecondsFormat::Micros, true));
        let request = self
            .client
            .request(Method::PATCH, &Self::table_path(CALENDAR_EVENTS_TABLE), bearer.as_deref())
            .query(&[("id", id_filter.as_str()), ("updated_at", version_filter.as_str())])
            .header("Prefer", "return=representation")
            .json(changes);

        let rows: Vec<StoredEvent> = self.client.send(request).await?;
        debug!(matched = !rows.is_empty(), "guarded update sent");
        Ok(rows.into_iter().next())
    }
}
