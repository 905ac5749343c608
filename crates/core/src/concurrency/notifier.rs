//! Default conflict notifier that reports through `tracing`

use tracing::warn;

use super::ports::ConflictNotifier;
use super::ConflictNotice;

/// Emits each conflict as a structured `warn` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingConflictNotifier;

impl ConflictNotifier for TracingConflictNotifier {
    fn notify(&self, notice: &ConflictNotice) {
        warn!(
            record_id = %notice.record_id,
            snapshot_updated_at = ?notice.snapshot_updated_at,
            current_updated_at = ?notice.current_updated_at,
            locale = ?notice.locale,
            title = %notice.title,
            "{}",
            notice.message
        );
    }
}
