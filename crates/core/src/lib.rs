//! # TalentBook Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Optimistic concurrency check and the guarded edit flow built on it
//! - Weekend-matrix bulk commit coordination
//! - Port/adapter interfaces (traits) for the session, serverless functions,
//!   the events table and the calendar read views
//! - Localized user-facing conflict messages
//!
//! ## Architecture Principles
//! - Only depends on `talentbook-domain`
//! - No HTTP or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod calendar_ports;
pub mod commit;
pub mod concurrency;
pub mod i18n;
pub mod session;

// Re-export specific items to avoid ambiguity
pub use calendar_ports::{CalendarScope, CalendarViewReader, UpcomingEventsService};
pub use commit::ports::FunctionInvoker;
pub use commit::WeekendMatrixCommitService;
pub use concurrency::ports::{CalendarEventStore, ConflictNotifier};
pub use concurrency::{
    check_concurrency, check_concurrency_raw, ConflictNotice, ConflictResolution, EventEditService,
    Resolved, SaveOutcome, TracingConflictNotifier,
};
pub use i18n::{Locale, Message};
pub use session::ports::SessionProvider;
