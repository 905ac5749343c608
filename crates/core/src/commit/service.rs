//! Weekend-matrix commit service - core coordination logic

use std::sync::Arc;

use chrono::Utc;
use talentbook_domain::constants::{DEFAULT_COMMIT_ERROR_MESSAGE, WEEKEND_MATRIX_COMMIT_FUNCTION};
use talentbook_domain::{CommitBatch, CommitResponse, Result, TalentBookError};
use tracing::{debug, info, instrument, warn};

use super::ports::FunctionInvoker;
use crate::session::ports::SessionProvider;

/// Bulk commit coordinator
///
/// Stateless apart from the injected collaborators; every call is an
/// independent, single round trip.
pub struct WeekendMatrixCommitService {
    session: Arc<dyn SessionProvider>,
    functions: Arc<dyn FunctionInvoker>,
}

impl WeekendMatrixCommitService {
    /// Create a new commit service
    pub fn new(session: Arc<dyn SessionProvider>, functions: Arc<dyn FunctionInvoker>) -> Self {
        Self { session, functions }
    }

    /// Submit one talent/year batch to the remote reconciliation function.
    ///
    /// The session is read first; without a valid one nothing is sent. The
    /// remote response is returned as-is, with no local reconciliation of
    /// its counts.
    ///
    /// # Errors
    ///
    /// - [`TalentBookError::AuthenticationRequired`] if there is no valid session
    /// - [`TalentBookError::InvalidInput`] if an event ends before it starts
    /// - [`TalentBookError::RemoteRejected`] with the remote message (or a
    ///   default one when the remote gave none)
    /// - [`TalentBookError::Network`] on transport failure
    #[instrument(
        skip(self, batch),
        fields(talent_id = %batch.talent_id, year = batch.year, mode = %batch.mode, events = batch.len())
    )]
    pub async fn commit_weekend_matrix(&self, batch: CommitBatch) -> Result<CommitResponse> {
        let access_token = self.access_token().await?;

        batch.validate()?;

        let body = serde_json::to_value(&batch)
            .map_err(|e| TalentBookError::Internal(format!("Failed to serialize batch: {e}")))?;

        debug!(function = WEEKEND_MATRIX_COMMIT_FUNCTION, "invoking commit function");

        let raw = self
            .functions
            .invoke(WEEKEND_MATRIX_COMMIT_FUNCTION, &access_token, body)
            .await
            .map_err(|err| match err {
                TalentBookError::RemoteRejected(message) if message.trim().is_empty() => {
                    TalentBookError::RemoteRejected(DEFAULT_COMMIT_ERROR_MESSAGE.to_string())
                }
                other => other,
            })
            .inspect_err(|err| warn!(error = %err, kind = err.label(), "weekend matrix commit failed"))?;

        let response: CommitResponse = serde_json::from_value(raw).map_err(|e| {
            TalentBookError::Internal(format!("Unexpected commit function response: {e}"))
        })?;

        let counts = response.counts;
        if response.ok {
            info!(
                created = counts.created,
                updated = counts.updated,
                skipped = counts.skipped,
                failed = counts.failed,
                "weekend matrix committed"
            );
        } else {
            warn!(
                created = counts.created,
                updated = counts.updated,
                skipped = counts.skipped,
                failed = counts.failed,
                errors = response.errors.as_ref().map_or(0, Vec::len),
                "weekend matrix commit reported failures"
            );
        }

        Ok(response)
    }

    async fn access_token(&self) -> Result<String> {
        match self.session.session().await? {
            Some(session) if session.is_valid(Utc::now()) => Ok(session.access_token),
            Some(_) => {
                debug!("session expired or missing token");
                Err(TalentBookError::AuthenticationRequired)
            }
            None => Err(TalentBookError::AuthenticationRequired),
        }
    }
}
