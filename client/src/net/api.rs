//! REST API helpers for the external Calf backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since the
//! bearer token only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Non-2xx statuses become
//! `ApiError::Status` carrying the backend `message` when it sent one; a 401
//! on a bearer-authenticated call becomes `ApiError::Unauthorized` so pages
//! can offer a login link. Nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::error::{Auth, decode_body, failure_from_body, login_failure};
#[cfg(feature = "hydrate")]
use super::types::{Envelope, ListEnvelope, UserPayload};
use super::types::{
    AuthResponse, LoginRequest, Project, ProjectDraft, RegisterRequest, RegisterResponse, SendOtpRequest, User,
};

/// Backend origin used when `CALF_API_ORIGIN` is not set at build time.
pub const DEFAULT_API_ORIGIN: &str = "http://localhost:5000";

/// Backend origin, fixed at compile time.
pub fn api_origin() -> &'static str {
    option_env!("CALF_API_ORIGIN")
        .map(|origin| origin.trim_end_matches('/'))
        .filter(|origin| !origin.is_empty())
        .unwrap_or(DEFAULT_API_ORIGIN)
}

#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[cfg(any(test, feature = "hydrate"))]
fn auth_endpoint(action: &str) -> String {
    format!("/api/v1/auth/{action}")
}

/// `/api/v1/project/` for the collection, `/api/v1/project/{id}` for one record.
#[cfg(any(test, feature = "hydrate"))]
fn project_endpoint(id: Option<&str>) -> String {
    match id {
        Some(id) => format!("/api/v1/project/{id}"),
        None => "/api/v1/project/".to_owned(),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint_url(origin: &str, path: &str) -> String {
    format!("{origin}{path}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn encode<T: serde::Serialize>(body: &T) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Browser redirect target that starts the Google OAuth flow.
pub fn google_auth_url() -> String {
    format!("{}/api/v1/auth/google", api_origin())
}

/// Issue one request and return the raw body of a 2xx response.
#[cfg(feature = "hydrate")]
async fn send(
    method: Method,
    path: &str,
    body: Option<String>,
    auth: Auth,
    fallback: Option<&str>,
) -> Result<String, ApiError> {
    send_with(method, path, body, auth, |status, text| failure_from_body(status, text, auth, fallback)).await
}

/// Like `send`, with the caller deciding how a non-2xx response maps to an error.
#[cfg(feature = "hydrate")]
async fn send_with<F>(
    method: Method,
    path: &str,
    body: Option<String>,
    auth: Auth,
    on_failure: F,
) -> Result<String, ApiError>
where
    F: FnOnce(u16, &str) -> ApiError,
{
    use gloo_net::http::Request;

    let url = endpoint_url(api_origin(), path);
    let mut builder = match method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
        Method::Delete => Request::delete(&url),
    }
    .header("Content-Type", "application/json");

    if auth == Auth::Bearer {
        if let Some(token) = crate::util::session::browser_session().read() {
            builder = builder.header("Authorization", &bearer_header(&token));
        }
    }

    let sent = match body {
        Some(body) => builder.body(body).map_err(|e| ApiError::Network(e.to_string()))?.send().await,
        None => builder.send().await,
    };
    let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        log::warn!("{method:?} {path} failed: {status}");
        return Err(on_failure(status, &text));
    }
    Ok(text)
}

/// Send the OTP for registration to `email`.
///
/// # Errors
///
/// Returns the backend message, or "Failed to send OTP".
pub async fn send_otp(req: &SendOtpRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = encode(req)?;
        send(Method::Post, &auth_endpoint("send-otp"), Some(body), Auth::None, Some("Failed to send OTP")).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(ApiError::Unavailable)
    }
}

/// Complete registration with the emailed OTP.
///
/// # Errors
///
/// Returns the backend message, or "Registration failed".
pub async fn register(req: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = encode(req)?;
        let text =
            send(Method::Post, &auth_endpoint("register"), Some(body), Auth::None, Some("Registration failed")).await?;
        decode_body(&text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(ApiError::Unavailable)
    }
}

/// Exchange credentials for a bearer token.
///
/// # Errors
///
/// Returns the backend message, or "Login failed". A non-JSON body yields
/// `ApiError::Decode`.
pub async fn login(req: &LoginRequest) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = encode(req)?;
        let text = send_with(Method::Post, &auth_endpoint("login"), Some(body), Auth::None, login_failure).await?;
        decode_body(&text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(ApiError::Unavailable)
    }
}

/// Tell the backend the session ended. Failures are logged and ignored;
/// callers clear the local session regardless.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = send(Method::Post, &auth_endpoint("logout"), None, Auth::Bearer, None).await {
            log::warn!("logout request failed: {e}");
        }
    }
}

/// Fetch the display identity for the current session.
///
/// # Errors
///
/// Returns `ApiError::Unauthorized` when the token was rejected.
pub async fn fetch_current_user() -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let text = send(Method::Get, &auth_endpoint("me"), None, Auth::Bearer, None).await?;
        decode_body::<UserPayload>(&text).map(User::from)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// List the caller's projects. A response without `data` is an empty list.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the body is malformed.
pub async fn list_projects() -> Result<Vec<Project>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let text = send(Method::Get, &project_endpoint(None), None, Auth::Bearer, None).await?;
        decode_body::<ListEnvelope<Project>>(&text).map(ListEnvelope::into_items)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch one project.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the body is malformed.
pub async fn get_project(id: &str) -> Result<Project, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let text = send(Method::Get, &project_endpoint(Some(id)), None, Auth::Bearer, None).await?;
        decode_body::<Envelope<Project>>(&text).map(Envelope::into_inner)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Create a project. Callers re-fetch the list afterwards.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn create_project(draft: &ProjectDraft) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = encode(draft)?;
        send(Method::Post, &project_endpoint(None), Some(body), Auth::Bearer, None).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err(ApiError::Unavailable)
    }
}

/// Replace a project's name and description.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn update_project(id: &str, draft: &ProjectDraft) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = encode(draft)?;
        send(Method::Put, &project_endpoint(Some(id)), Some(body), Auth::Bearer, None).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, draft);
        Err(ApiError::Unavailable)
    }
}

/// Delete a project.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn delete_project(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(Method::Delete, &project_endpoint(Some(id)), None, Auth::Bearer, None).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}
