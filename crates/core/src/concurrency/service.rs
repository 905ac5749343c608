//! Guarded edit service - writes calendar events only from a fresh snapshot

use std::sync::Arc;

use chrono::{DateTime, Utc};

use talentbook_domain::{EditSnapshot, EventChanges, Result, StoredEvent, TalentBookError};
use tracing::{debug, info, instrument};

use super::ports::{CalendarEventStore, ConflictNotifier};
use super::{check_concurrency, ConflictNotice, ConflictResolution};
use crate::i18n::Locale;

/// Outcome of [`EventEditService::save`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The snapshot was current and the changes were written.
    Saved(StoredEvent),
    /// The stored row moved on; nothing was written.
    Conflict(ConflictNotice),
}

/// Outcome of [`EventEditService::resolve`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// Local changes dropped; edit continues from this fresh snapshot.
    Reloaded { snapshot: EditSnapshot, event: StoredEvent },
    /// Local changes written over the newer row.
    Overwritten(StoredEvent),
}

/// Edit service for calendar events
pub struct EventEditService {
    store: Arc<dyn CalendarEventStore>,
    notifier: Arc<dyn ConflictNotifier>,
    locale: Locale,
}

impl EventEditService {
    /// Create a new edit service
    pub fn new(store: Arc<dyn CalendarEventStore>, notifier: Arc<dyn ConflictNotifier>) -> Self {
        Self { store, notifier, locale: Locale::default() }
    }

    /// Set the locale used for conflict notifications
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Start editing `id`: read the row and capture its version.
    #[instrument(skip(self))]
    pub async fn begin_edit(&self, id: &str) -> Result<(EditSnapshot, StoredEvent)> {
        let event = self.fetch_required(id).await?;
        let snapshot = event.snapshot();
        debug!(updated_at = ?snapshot.updated_at, "edit snapshot captured");
        Ok((snapshot, event))
    }

    /// Write `changes` if `snapshot` is still current.
    ///
    /// On a stale snapshot a localized notification is raised and
    /// [`SaveOutcome::Conflict`] is returned; the caller must then pick a
    /// [`ConflictResolution`].
    #[instrument(skip(self, snapshot, changes), fields(record_id = %snapshot.id))]
    pub async fn save(&self, snapshot: &EditSnapshot, changes: &EventChanges) -> Result<SaveOutcome> {
        changes.validate()?;

        let current = self.fetch_required(&snapshot.id).await?;
        if !check_concurrency(snapshot.updated_at, current.updated_at) {
            return Ok(self.conflict(snapshot, current.updated_at));
        }

        let saved = match snapshot.updated_at {
            Some(since) => {
                match self.store.update_event_if_unchanged(&snapshot.id, changes, since).await? {
                    Some(saved) => saved,
                    None => {
                        // Row changed between the read and the write
                        let current = self.fetch_required(&snapshot.id).await?;
                        if !check_concurrency(snapshot.updated_at, current.updated_at) {
                            return Ok(self.conflict(snapshot, current.updated_at));
                        }
                        debug!("stored row has no version, writing unguarded");
                        self.store.update_event(&snapshot.id, changes).await?
                    }
                }
            }
            None => self.store.update_event(&snapshot.id, changes).await?,
        };
        info!(updated_at = ?saved.updated_at, "event saved");
        Ok(SaveOutcome::Saved(saved))
    }

    /// Apply the user's choice after a conflict.
    #[instrument(skip(self, snapshot, changes), fields(record_id = %snapshot.id))]
    pub async fn resolve(
        &self,
        snapshot: &EditSnapshot,
        changes: &EventChanges,
        resolution: ConflictResolution,
    ) -> Result<Resolved> {
        match resolution {
            ConflictResolution::Reload => {
                let event = self.fetch_required(&snapshot.id).await?;
                info!("local edit discarded, record reloaded");
                Ok(Resolved::Reloaded { snapshot: event.snapshot(), event })
            }
            ConflictResolution::Overwrite => {
                changes.validate()?;
                let saved = self.store.update_event(&snapshot.id, changes).await?;
                info!(updated_at = ?saved.updated_at, "newer record overwritten");
                Ok(Resolved::Overwritten(saved))
            }
        }
    }

    fn conflict(&self, snapshot: &EditSnapshot, current: Option<DateTime<Utc>>) -> SaveOutcome {
        let notice =
            ConflictNotice::new(snapshot.id.clone(), snapshot.updated_at, current, self.locale);
        self.notifier.notify(&notice);
        SaveOutcome::Conflict(notice)
    }

    async fn fetch_required(&self, id: &str) -> Result<StoredEvent> {
        self.store
            .fetch_event(id)
            .await?
            .ok_or_else(|| TalentBookError::NotFound(format!("calendar event {id}")))
    }
}
