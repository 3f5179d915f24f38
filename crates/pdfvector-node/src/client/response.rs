//! Response status handling.

use reqwest::StatusCode;
use serde_json::Value;

use crate::error::{ClientError, ClientResult};

/// Map a status and body to the parsed JSON or a typed error.
pub(super) fn into_json(status: StatusCode, text: &str) -> ClientResult<Value> {
    if status.is_success() {
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        return serde_json::from_str(text).map_err(ClientError::from);
    }

    let message = error_message(status, text);
    let code = status.as_u16();

    Err(match code {
        400 | 422 => ClientError::bad_request(message),
        401 | 403 => ClientError::unauthorized(code, message),
        404 => ClientError::not_found(message),
        500..=599 => ClientError::server(code, message),
        _ => ClientError::UnexpectedStatus { status: code, message },
    })
}

/// Extract the API's error message from a failed response body.
///
/// Prefers a JSON `message` or `error` field (including `error.message`),
/// falls back to the raw body, then to the status reason.
#[must_use]
pub fn error_message(status: StatusCode, text: &str) -> String {
    if let Ok(json) = serde_json::from_str::<Value>(text) {
        let candidates = [
            json.get("message"),
            json.get("error").filter(|e| e.is_string()),
            json.get("error").and_then(|e| e.get("message")),
        ];
        if let Some(message) = candidates.into_iter().flatten().find_map(Value::as_str) {
            return message.to_string();
        }
    }

    let text = text.trim();
    if !text.is_empty() {
        return text.to_string();
    }

    status.canonical_reason().unwrap_or("Request failed").to_string()
}
