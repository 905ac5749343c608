use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, ValueEnum};
use talentbook_core::{
    ConflictResolution, EventEditService, Resolved, SaveOutcome, TracingConflictNotifier,
};
use talentbook_domain::{EditSnapshot, EventChanges, EventStatus};
use talentbook_infra::RestClient;

use super::print_json;
use crate::context::AppContext;

#[derive(Args, Debug, Clone)]
pub struct EditArgs {
    /// Event id
    pub id: String,

    /// `updated_at` the edit is based on (RFC 3339). Read fresh when omitted.
    #[arg(long)]
    pub since: Option<DateTime<Utc>>,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub status: Option<EventStatus>,

    #[arg(long)]
    pub start: Option<NaiveDate>,

    #[arg(long)]
    pub end: Option<NaiveDate>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,
}

impl EditArgs {
    fn changes(&self) -> EventChanges {
        EventChanges {
            event_title: self.title.clone(),
            status: self.status,
            start_date: self.start,
            end_date: self.end,
            timezone: None,
            location: self.location.clone(),
            notes: self.notes.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OnConflict {
    /// Stop and report the conflict
    Abort,
    /// Drop the edit and show the stored event
    Reload,
    /// Write the edit over the newer event
    Overwrite,
}

pub async fn run(ctx: &AppContext, args: EditArgs, on_conflict: OnConflict) -> Result<()> {
    let changes = args.changes();
    if changes.is_empty() {
        anyhow::bail!("nothing to change; pass at least one of --title, --status, --start, --end, --location, --notes");
    }

    let store = Arc::new(RestClient::new(ctx.client.clone(), ctx.session()));
    let service = EventEditService::new(store, Arc::new(TracingConflictNotifier))
        .with_locale(ctx.locale());

    let snapshot = match args.since {
        Some(since) => EditSnapshot::new(args.id.clone(), Some(since)),
        None => service.begin_edit(&args.id).await?.0,
    };

    let notice = match service.save(&snapshot, &changes).await? {
        SaveOutcome::Saved(event) => return print_json(&event),
        SaveOutcome::Conflict(notice) => notice,
    };

    let resolution = match on_conflict {
        OnConflict::Abort => {
            let actions: Vec<_> = notice.actions().iter().map(|(_, label)| *label).collect();
            return Err(anyhow::anyhow!("{}: {}", notice.title, notice.message))
                .with_context(|| format!("rerun with --on-conflict reload|overwrite ({})", actions.join(" / ")));
        }
        OnConflict::Reload => ConflictResolution::Reload,
        OnConflict::Overwrite => ConflictResolution::Overwrite,
    };

    match service.resolve(&snapshot, &changes, resolution).await? {
        Resolved::Reloaded { event, .. } => print_json(&event),
        Resolved::Overwritten(event) => print_json(&event),
    }
}
