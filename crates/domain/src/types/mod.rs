//! Domain types and models
//!
//! Shapes exchanged with the backend: calendar rows, weekend-matrix commit
//! payloads, edit snapshots and sessions.

pub mod calendar;
pub mod commit;
pub mod concurrency;
pub mod session;

pub use calendar::{CalendarEvent, EventChanges, EventStatus, StoredEvent, UpcomingEvent};
pub use commit::{CommitBatch, CommitCounts, CommitMode, CommitResponse};
pub use concurrency::EditSnapshot;
pub use session::{AuthUser, Session};
