use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of failure categories used to drive presentation branching.
///
/// Extending the taxonomy means adding a new tag here; classification never
/// produces a category outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorVariant {
    /// Transport failure: the request never produced a response.
    Network,
    /// Authentication or authorization failure (401/403).
    Auth,
    /// The requested resource does not exist (404).
    NotFound,
    /// Everything else, including other 4xx/5xx responses.
    Default,
}

/// Canonical failure record produced by [`classify`](crate::classify::classify).
///
/// `message` is display text (backend-controlled where available); `variant`
/// is the closed-set category the UI branches on. The raw failure is retained
/// unmodified in `original` for diagnostics and is never re-inspected after
/// classification.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct StandardizedError {
    pub message: String,
    pub variant: ErrorVariant,
    /// Transport status code, when the raw failure carried one.
    pub status: Option<u16>,
    pub original: Option<RawFailure>,
}

/// Structural model of the heterogeneous failure values producers reject
/// with: typed transport errors, error responses, or plain messages.
///
/// Classification inspects only the shape of this record, in a fixed
/// priority order; it never looks at where the failure came from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawFailure {
    /// Explicit transport-failure marker set by producers that detect
    /// connectivity loss themselves.
    pub network_error: bool,
    pub message: Option<String>,
    /// OS-level error code such as `"ECONNREFUSED"`.
    pub code: Option<String>,
    /// The request was dispatched to the backend. Combined with a missing
    /// `response`, this indicates a sent-but-unanswered request.
    pub request_sent: bool,
    pub response: Option<ResponseInfo>,
}

/// Response descriptor attached to a failure when the backend answered with
/// a non-success status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseInfo {
    pub status: u16,
    pub status_text: String,
    pub body: Option<serde_json::Value>,
}

impl ResponseInfo {
    /// Create a response descriptor, deriving the canonical status text.
    pub fn new(status: u16) -> Self {
        let status_text = reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Unknown Status")
            .to_string();
        Self {
            status,
            status_text,
            body: None,
        }
    }

    /// Attach a parsed response body.
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

impl RawFailure {
    /// Create an explicitly marked transport failure.
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self {
            network_error: true,
            message: Some(message.into()),
            request_sent: true,
            ..Self::default()
        }
    }

    /// Create a plain failure carrying only a message.
    pub fn message<S: Into<String>>(message: S) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Create a connection-refused failure.
    pub fn connection_refused() -> Self {
        Self {
            code: Some("ECONNREFUSED".to_string()),
            message: Some("Connection refused".to_string()),
            request_sent: true,
            ..Self::default()
        }
    }

    /// Create a failure for a response with the given status code.
    pub fn from_status(status: u16) -> Self {
        Self {
            request_sent: true,
            response: Some(ResponseInfo::new(status)),
            ..Self::default()
        }
    }

    /// Create a failure for a response with a status code and parsed body.
    pub fn from_status_with_body(status: u16, body: serde_json::Value) -> Self {
        Self {
            request_sent: true,
            response: Some(ResponseInfo::new(status).with_body(body)),
            ..Self::default()
        }
    }

    /// Capture a non-success HTTP response, keeping its JSON body when the
    /// payload parses as JSON.
    pub async fn from_http_response(response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        let body = response.json::<serde_json::Value>().await.ok();
        let mut info = ResponseInfo::new(status);
        if let Some(body) = body {
            info = info.with_body(body);
        }
        Self {
            request_sent: true,
            response: Some(info),
            ..Self::default()
        }
    }
}

impl From<reqwest::Error> for RawFailure {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            return Self {
                network_error: true,
                message: Some(err.to_string()),
                request_sent: true,
                ..Self::default()
            };
        }
        if let Some(status) = err.status() {
            return Self {
                message: Some(err.to_string()),
                request_sent: true,
                response: Some(ResponseInfo::new(status.as_u16())),
                ..Self::default()
            };
        }
        Self {
            message: Some(err.to_string()),
            request_sent: err.is_request() || err.is_body(),
            ..Self::default()
        }
    }
}
