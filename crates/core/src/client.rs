//! Protocol Client
//!
//! Performs the single network round-trip per conversation round. The
//! [`TurnClient`] trait is the seam the controller depends on; the shipped
//! implementation speaks JSON over HTTP with `reqwest`, but anything that can
//! turn a [`TurnRequest`] into a [`TurnResponse`] (or a mock in tests) fits.

use crate::protocol::{TurnRequest, TurnResponse};
use async_trait::async_trait;
use tracing::debug;

/// A failed turn round-trip. The controller recovers from every variant the
/// same way: log, keep the round and transcript untouched, reopen the gate.
#[derive(Debug, thiserror::Error)]
pub enum TurnError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("orchestration service returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed turn response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Contract for anything that can carry out one turn round-trip.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TurnClient: Send + Sync {
    async fn request_turn(&self, request: &TurnRequest) -> Result<TurnResponse, TurnError>;
}

/// `TurnClient` over plain HTTP POST, matching the orchestration service's
/// single `discuss` endpoint.
pub struct HttpTurnClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpTurnClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl TurnClient for HttpTurnClient {
    async fn request_turn(&self, request: &TurnRequest) -> Result<TurnResponse, TurnError> {
        debug!(round = request.round, endpoint = %self.endpoint, "sending turn request");

        let http_response = self.http.post(&self.endpoint).json(request).send().await?;
        let status = http_response.status();
        if !status.is_success() {
            return Err(TurnError::Status(status));
        }

        // Read the body as text first so a malformed payload surfaces as a
        // parse error rather than a transport one.
        let body = http_response.text().await?;
        let response: TurnResponse = serde_json::from_str(&body)?;
        debug!(
            has_agent_a = response.agent_a_message.is_some(),
            has_agent_b = response.agent_b_message.is_some(),
            "turn response parsed"
        );
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_are_distinct_from_transport_errors() {
        let err: TurnError = serde_json::from_str::<TurnResponse>("not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, TurnError::Parse(_)));
        assert!(err.to_string().starts_with("malformed turn response"));
    }

    #[test]
    fn status_error_reports_the_code() {
        let err = TurnError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("500"));
    }
}
