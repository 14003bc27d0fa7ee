//! Wire DTOs for the authentication API.
//!
//! DESIGN
//! ======
//! The client-held `User` deliberately has no password field. Success bodies
//! may carry a session token alongside the user; it is ignored because the
//! credential travels in an HTTP-only cookie.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the `/api/auth/*` endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub username: String,
    /// Server-assigned role, e.g. `"user"`.
    pub role: String,
    /// Avatar image URL; empty when the user never set one.
    #[serde(default)]
    pub avatar_url: String,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    /// RFC 3339 last-update timestamp.
    pub updated_at: String,
}

/// Success body of login, register and current-user calls.
///
/// Accepts both `{"user": {...}}` and a bare user object.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AuthResponse {
    Wrapped { user: User },
    Bare(User),
}

impl AuthResponse {
    pub fn into_user(self) -> User {
        match self {
            Self::Wrapped { user } | Self::Bare(user) => user,
        }
    }
}

/// Credentials for `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Account details for `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Failure body shape: `{"error": "..."}`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
