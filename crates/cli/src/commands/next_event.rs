use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use clap::ValueEnum;
use talentbook_core::UpcomingEventsService;
use talentbook_infra::RestClient;

use super::print_json;
use crate::context::AppContext;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Scope {
    Business,
    Talent,
}

pub async fn run(ctx: &AppContext, scope: Scope) -> Result<()> {
    let reader = Arc::new(RestClient::new(ctx.client.clone(), ctx.session()));
    let service = UpcomingEventsService::new(reader);

    let now = Utc::now();
    let next = match scope {
        Scope::Business => service.next_business_event(now).await?,
        Scope::Talent => service.next_talent_event(now).await?,
    };

    match next {
        Some(event) => print_json(&event),
        None => {
            println!("No upcoming events.");
            Ok(())
        }
    }
}
