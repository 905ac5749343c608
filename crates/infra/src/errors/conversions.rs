//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use talentbook_domain::TalentBookError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub TalentBookError);

impl From<InfraError> for TalentBookError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<TalentBookError> for InfraError {
    fn from(value: TalentBookError) -> Self {
        InfraError(value)
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → TalentBookError */
/* -------------------------------------------------------------------------- */

impl From<HttpError> for InfraError {
    fn from(err: HttpError) -> Self {
        if err.is_builder() {
            return InfraError(TalentBookError::Config(format!("invalid HTTP request: {err}")));
        }

        if err.is_timeout() {
            return InfraError(TalentBookError::Network(format!("HTTP request timed out: {err}")));
        }

        if err.is_connect() {
            return InfraError(TalentBookError::Network(format!("HTTP connection failure: {err}")));
        }

        if err.is_decode() {
            return InfraError(TalentBookError::Internal(format!(
                "failed to decode HTTP response: {err}"
            )));
        }

        InfraError(TalentBookError::Network(err.to_string()))
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(err: serde_json::Error) -> Self {
        InfraError(TalentBookError::Internal(format!("JSON error: {err}")))
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use super::*;

    #[tokio::test]
    async fn connection_refused_maps_to_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        let error = client.get(format!("http://{addr}")).send().await.unwrap_err();

        let mapped: TalentBookError = InfraError::from(error).into();
        match mapped {
            TalentBookError::Network(msg) => assert!(msg.contains("connection")),
            other => panic!("expected network error, got {other:?}"),
        }
    }

    #[test]
    fn json_errors_map_to_internal() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let mapped: TalentBookError = InfraError::from(err).into();
        assert!(matches!(mapped, TalentBookError::Internal(_)));
    }
}
