//! Error taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is terminal for the user action that caused it; nothing is
//! retried. A 401 from an authenticated endpoint is kept distinct so pages can
//! offer a login prompt instead of a generic error.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;

/// Errors produced by `net::api` calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// An authenticated endpoint rejected the bearer token.
    #[error("Unauthorized: Please log in")]
    Unauthorized,

    /// Any other non-2xx response.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response body was not the JSON we expected.
    #[error("Invalid server response")]
    Decode(String),

    /// Called during server rendering, where the browser session is absent.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

/// Whether a request carries the session bearer token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Auth {
    None,
    Bearer,
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn status_message(status: u16) -> String {
    format!("HTTP error! status: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
/// Map a non-2xx response to an `ApiError`.
///
/// The backend `message` wins when present; otherwise `fallback`, and
/// finally a generic status line.
pub(crate) fn failure_from_body(status: u16, body: &str, auth: Auth, fallback: Option<&str>) -> ApiError {
    if status == 401 && auth == Auth::Bearer {
        return ApiError::Unauthorized;
    }
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .or_else(|| fallback.map(str::to_owned))
        .unwrap_or_else(|| status_message(status));
    ApiError::Status { status, message }
}

/// Map a failed login. A body that is not JSON at all is reported as an
/// invalid response whatever the status.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn login_failure(status: u16, body: &str) -> ApiError {
    if let Err(e) = serde_json::from_str::<serde_json::Value>(body) {
        return ApiError::Decode(e.to_string());
    }
    failure_from_body(status, body, Auth::None, Some("Login failed"))
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn decode_body<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
