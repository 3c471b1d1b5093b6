//! Failure classification.
//!
//! Turns an arbitrary [`RawFailure`] into a [`StandardizedError`] with a
//! display message and a closed-set variant. Classification is pure and
//! total: equal inputs always classify identically, and every input —
//! including no input at all — yields a well-formed record.

use serde_json::Value;
use tracing::error;

use crate::error::{ErrorVariant, RawFailure, StandardizedError};

/// Fallback message when the failure carries no usable information.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

/// Message used when a request was dispatched but no response arrived.
pub const CONNECTIVITY_MESSAGE: &str =
    "Unable to connect to the server. Please check your internet connection.";

/// Classify a raw failure into a standardized error record.
///
/// `None` stands in for a producer that rejected without a failure value and
/// yields the unknown-error default record.
pub fn classify(raw: Option<&RawFailure>) -> StandardizedError {
    let Some(raw) = raw else {
        return StandardizedError {
            message: UNKNOWN_ERROR_MESSAGE.to_string(),
            variant: ErrorVariant::Default,
            status: None,
            original: None,
        };
    };

    StandardizedError {
        message: format_message(raw),
        variant: variant_of(raw),
        status: raw.response.as_ref().map(|r| r.status),
        original: Some(raw.clone()),
    }
}

/// Determine the failure category.
///
/// First match wins; the order matters because the categories overlap (a
/// timeout can carry network-flavored text while also having no response).
pub fn variant_of(raw: &RawFailure) -> ErrorVariant {
    let message = raw
        .message
        .as_deref()
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if raw.network_error
        || message.contains("network")
        || message.contains("connection")
        || raw.code.as_deref() == Some("ECONNREFUSED")
        || (raw.request_sent && raw.response.is_none())
    {
        return ErrorVariant::Network;
    }

    match raw.response.as_ref().map(|r| r.status) {
        Some(401) | Some(403) => ErrorVariant::Auth,
        Some(404) => ErrorVariant::NotFound,
        _ => ErrorVariant::Default,
    }
}

/// Derive the display message, independent of the variant.
///
/// Priority: backend-supplied body message, fixed status-code table,
/// connectivity fallback for sent-but-unanswered requests, the failure's own
/// message, then the unknown-error default.
pub fn format_message(raw: &RawFailure) -> String {
    if let Some(response) = &raw.response {
        if let Some(server_message) = body_message(response.body.as_ref()) {
            return server_message;
        }
        return status_message(response.status, &response.status_text);
    }

    if raw.request_sent {
        return CONNECTIVITY_MESSAGE.to_string();
    }

    raw.message
        .clone()
        .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string())
}

/// Log a classified failure in a consistent format, keeping the raw failure
/// visible for diagnostics.
pub fn log_failure(err: &StandardizedError, context: &str) {
    error!(
        context,
        variant = ?err.variant,
        status = err.status,
        original = ?err.original,
        "{}",
        err.message
    );
}

/// Extract an explicit `message` or `error` string field from a response body.
fn body_message(body: Option<&Value>) -> Option<String> {
    let body = body?;
    body.get("message")
        .or_else(|| body.get("error"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Fixed status→message table for common codes.
fn status_message(status: u16, status_text: &str) -> String {
    match status {
        400 => "Invalid request. Please check your data.".to_string(),
        401 => "Your session has expired. Please log in again.".to_string(),
        403 => "You don't have permission to access this resource.".to_string(),
        404 => "The requested resource could not be found.".to_string(),
        422 => "The provided data is invalid.".to_string(),
        429 => "Too many requests. Please try again later.".to_string(),
        500 => "A server error occurred. Please try again later.".to_string(),
        _ => format!("Error {}: {}", status, status_text),
    }
}
