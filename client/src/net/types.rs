//! Wire DTOs for the external REST backend.
//!
//! DESIGN
//! ======
//! The backend is loose about response shapes: projects arrive as
//! `{ data: ... }` or bare, the current user as `{ data: user }`,
//! `{ user: user }` or a bare object, and ids as `_id`. Every variant is
//! normalized here so pages and state only ever see the typed structs below.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A project record owned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Backend identifier. Emitted as `_id`; `id` is accepted too.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(rename = "projectName", default)]
    pub name: String,
    #[serde(rename = "projectDesc", default)]
    pub description: String,
    /// ISO 8601 creation timestamp, if the backend sent one.
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Request body for project create and update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDraft {
    #[serde(rename = "projectName")]
    pub name: String,
    #[serde(rename = "projectDesc")]
    pub description: String,
}

impl ProjectDraft {
    /// Draft pre-filled from an existing project (edit mode).
    pub fn from_project(project: &Project) -> Self {
        Self { name: project.name.clone(), description: project.description.clone() }
    }
}

/// Display identity returned by `GET /auth/me`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl User {
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() { "User" } else { &self.name }
    }

    pub fn display_email(&self) -> &str {
        if self.email.trim().is_empty() { "user@example.com" } else { &self.email }
    }
}

/// Any of the shapes `/auth/me` has been seen to return.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum UserPayload {
    Data { data: User },
    Wrapped { user: User },
    Bare(User),
}

impl From<UserPayload> for User {
    fn from(payload: UserPayload) -> Self {
        match payload {
            UserPayload::Data { data: user } | UserPayload::Wrapped { user } | UserPayload::Bare(user) => user,
        }
    }
}

/// A single record either wrapped in `{ data: ... }` or sent bare.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Self::Wrapped { data } | Self::Bare(data) => data,
        }
    }
}

/// A list response; a missing or null `data` field means an empty list.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListEnvelope<T> {
    #[serde(default)]
    pub data: Option<Vec<T>>,
}

impl<T> ListEnvelope<T> {
    pub fn into_items(self) -> Vec<T> {
        self.data.unwrap_or_default()
    }
}

/// Successful login body. A login without a token is not a session.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Successful register body; the backend may or may not issue a token.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl RegisterResponse {
    /// Token worth storing, if any.
    pub fn session_token(&self) -> Option<&str> {
        self.token.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }
}

/// Body of a failed request. Only `message` is ever read.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SendOtpRequest {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub otp: String,
}
