//! Typed HTTP response and error-body inspection

use super::api::ApiErrorResponse;

/// Status code and body of a completed API call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx, including the 204 returned by the batch endpoints
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse Google's error envelope, if the body is one
    pub fn api_error(&self) -> Option<ApiErrorResponse> {
        serde_json::from_str(&self.body).ok()
    }

    /// Human-readable error text: the envelope's message, else the raw body
    pub fn error_message(&self) -> String {
        self.api_error()
            .and_then(|e| e.error.message)
            .unwrap_or_else(|| self.raw_body())
    }

    /// The body as received, trimmed, for printing alongside the message
    pub fn raw_body(&self) -> String {
        let body = self.body.trim();
        if body.is_empty() {
            "(empty response body)".to_string()
        } else {
            body.to_string()
        }
    }
}

/// Markers Google uses for a token lacking the required scope
const PERMISSION_MARKERS: [&str; 3] = [
    "insufficientPermissions",
    "PERMISSION_DENIED",
    "ACCESS_TOKEN_SCOPE_INSUFFICIENT",
];

/// Whether a response is an authoritative "insufficient permission" denial
///
/// Requires HTTP 403 and a permission marker in the error body. Other 403s
/// (quota, disabled API) are ordinary failures.
pub fn is_permission_denied(response: &ApiResponse) -> bool {
    if response.status != 403 {
        return false;
    }

    if let Some(envelope) = response.api_error() {
        let error = envelope.error;
        if error.status.as_deref() == Some("PERMISSION_DENIED") {
            return true;
        }
        if error
            .errors
            .iter()
            .any(|e| e.reason.as_deref() == Some("insufficientPermissions"))
        {
            return true;
        }
    }

    PERMISSION_MARKERS
        .iter()
        .any(|marker| response.body.contains(marker))
}
