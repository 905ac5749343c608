//! Application constants
//!
//! Names of the backend objects this core talks to, and shared defaults.

/// Serverless function that reconciles a talent/year batch of events.
pub const WEEKEND_MATRIX_COMMIT_FUNCTION: &str = "import-weekend-matrix-commit";

/// Message used when the commit function fails without saying why.
pub const DEFAULT_COMMIT_ERROR_MESSAGE: &str = "Weekend matrix commit failed";

// Read views, ordered by `start_at` ascending and scoped by row-level rules
pub const BUSINESS_CALENDAR_VIEW: &str = "v_business_calendar_events";
pub const TALENT_CALENDAR_VIEW: &str = "v_talent_calendar_events";

/// Table behind the guarded edit flow.
pub const CALENDAR_EVENTS_TABLE: &str = "calendar_events";

// HTTP defaults
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOCALE: &str = "en";
