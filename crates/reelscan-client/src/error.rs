//! Client error types.

use reqwest::StatusCode;
use thiserror::Error;

use reelscan_models::NormalizedPoint;

pub type ClientResult<T> = Result<T, ClientError>;

/// Errors from talking to the device API.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The device answered with an error status. `msg` is the detail the
    /// device puts in its `{"msg": ...}` error body, `body` the full body
    /// for callers that dispatch on it.
    #[error("API error {status}: {msg}")]
    Api {
        status: StatusCode,
        msg: String,
        body: serde_json::Value,
    },
}

impl ClientError {
    /// Build an [`ClientError::Api`] from a non-success response, consuming
    /// its body.
    pub(crate) async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status();
        let body: serde_json::Value = response.json().await.unwrap_or(serde_json::Value::Null);
        let msg = body
            .get("msg")
            .and_then(|m| m.as_str())
            .unwrap_or_default()
            .to_string();

        ClientError::Api { status, msg, body }
    }

    /// The HTTP status of an API error, if that is what this is.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Outcome of a perforation detection request.
///
/// A detection miss is an expected outcome, not a transport problem, so it
/// gets its own variant carrying the seed point the device echoed back
/// (distinguishing a failed autodetect from a failed manual seed).
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("No perforation hole detected")]
    NotDetected { seed: NormalizedPoint },

    #[error(transparent)]
    Client(#[from] ClientError),
}

impl DetectError {
    /// Whether this was a failed full-automatic detection.
    pub fn is_autodetect_miss(&self) -> bool {
        matches!(self, DetectError::NotDetected { seed } if seed.is_auto_detect())
    }
}
