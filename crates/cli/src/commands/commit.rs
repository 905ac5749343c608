use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use talentbook_core::WeekendMatrixCommitService;
use talentbook_domain::{CalendarEvent, CommitBatch, CommitMode};
use talentbook_infra::FunctionsClient;

use super::print_json;
use crate::context::AppContext;

pub async fn run(ctx: &AppContext, talent: String, year: i32, mode: CommitMode, file: &Path) -> Result<()> {
    let events = read_events(file)?;
    let batch = CommitBatch::new(talent, year, mode, events);

    let service = WeekendMatrixCommitService::new(
        ctx.session(),
        Arc::new(FunctionsClient::new(ctx.client.clone())),
    );
    let response = service.commit_weekend_matrix(batch).await?;

    print_json(&response)?;
    if !response.ok {
        anyhow::bail!("commit reported {} failed event(s)", response.counts.failed);
    }
    Ok(())
}

/// Read a JSON array of events.
pub fn read_events(file: &Path) -> Result<Vec<CalendarEvent>> {
    let contents = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("{} is not a JSON array of calendar events", file.display()))
}
