//! Auth service: one typed call per user action.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::de::IgnoredAny;

use super::api::{ApiClient, ApiError, Transport};
use super::types::{AuthResponse, LoginRequest, RegisterRequest, User};

pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const REGISTER_ENDPOINT: &str = "/api/auth/register";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";
pub const CURRENT_USER_ENDPOINT: &str = "/api/auth/me";

/// Stateless wrapper mapping auth actions onto [`ApiClient`] calls.
#[derive(Clone, Debug)]
pub struct AuthService<T> {
    client: ApiClient<T>,
}

impl<T: Transport> AuthService<T> {
    pub fn new(client: ApiClient<T>) -> Self {
        Self { client }
    }

    /// `POST /api/auth/login`.
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] from the API client.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let body = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        let resp: AuthResponse = self.client.post(LOGIN_ENDPOINT, &body).await?;
        Ok(resp.into_user())
    }

    /// `POST /api/auth/register`.
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] from the API client.
    pub async fn register(&self, request: &RegisterRequest) -> Result<User, ApiError> {
        let resp: AuthResponse = self.client.post(REGISTER_ENDPOINT, request).await?;
        Ok(resp.into_user())
    }

    /// `POST /api/auth/logout`. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] from the API client.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let _: IgnoredAny = self.client.post_empty(LOGOUT_ENDPOINT).await?;
        Ok(())
    }

    /// `GET /api/auth/me`.
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`]; an unauthenticated session shows
    /// up as [`ApiError::Http`] with status 401.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        let resp: AuthResponse = self.client.get(CURRENT_USER_ENDPOINT).await?;
        Ok(resp.into_user())
    }
}
