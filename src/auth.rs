//! Authentication collaborator.
//!
//! The sync service and the Firestore store only need one thing from
//! authentication: the current signed-in user (identifier plus bearer token)
//! or none. [`AuthProvider`] captures that, [`SessionAuth`] holds the live
//! session for one user, and [`FirebaseAuthClient`] obtains sessions from
//! the Identity Toolkit REST API with email/password credentials.

use std::sync::RwLock;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::config::Config;
use crate::constants::IDENTITY_TOOLKIT_BASE_URL;

/// A signed-in user as seen by the rest of the library.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthUser {
    /// Stable user identifier; every todo document's `ownerId` equals this.
    pub user_id: String,
    pub email: String,
    /// Bearer token sent with Firestore requests.
    pub id_token: String,
    pub refresh_token: String,
}

/// Source of the current authenticated user.
///
/// This is the sole gate for every sync operation that touches the remote
/// collection.
pub trait AuthProvider: Send + Sync {
    /// The current signed-in user, or `None` when signed out.
    fn current_user(&self) -> Option<AuthUser>;

    /// Convenience accessor for just the user identifier.
    fn current_user_id(&self) -> Option<String> {
        self.current_user().map(|u| u.user_id)
    }
}

/// Error types for the Identity Toolkit client.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Auth error: {0}")]
    Other(String),
}

/// Holds the session for the current user, swappable at sign-in/sign-out.
///
/// One `SessionAuth` is constructed per user session and passed explicitly
/// to the services that need it; there is no process-wide singleton.
#[derive(Default)]
pub struct SessionAuth {
    user: RwLock<Option<AuthUser>>,
}

impl SessionAuth {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session already signed in, e.g. from a restored token.
    pub fn signed_in(user: AuthUser) -> Self {
        Self {
            user: RwLock::new(Some(user)),
        }
    }

    /// Install a new session user (sign-in) or clear it (sign-out).
    pub fn set_user(&self, user: Option<AuthUser>) {
        if let Ok(mut guard) = self.user.write() {
            *guard = user;
        }
    }

    pub fn sign_out(&self) {
        self.set_user(None);
    }
}

impl AuthProvider for SessionAuth {
    fn current_user(&self) -> Option<AuthUser> {
        self.user.read().ok().and_then(|guard| guard.clone())
    }
}

/// Successful Identity Toolkit account response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    local_id: String,
    #[serde(default)]
    email: String,
    id_token: String,
    #[serde(default)]
    refresh_token: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: String,
}

/// Email/password client for the Identity Toolkit (Firebase Auth) REST API.
pub struct FirebaseAuthClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl FirebaseAuthClient {
    /// Create a client with the project's web API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: IDENTITY_TOOLKIT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Create a client from configuration, reading the API key from the
    /// environment variable the config names.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.api_key().context("Firebase API key not available")?;
        Ok(Self::new(api_key))
    }

    /// Override the endpoint, e.g. to point at an auth emulator.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Register a new email/password account and return its session.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        self.account_request("signUp", email, password).await
    }

    /// Sign an existing account in and return its session.
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        self.account_request("signInWithPassword", email, password).await
    }

    async fn account_request(&self, action: &str, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        let url = format!("{}/accounts:{}?key={}", self.base_url, action, self.api_key);
        let body = json!({
            "email": email,
            "password": password,
            "returnSecureToken": true,
        });

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .map(|b| b.error.message)
                .unwrap_or_else(|_| text);
            return Err(match message.as_str() {
                "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" | "EMAIL_EXISTS" => {
                    AuthError::InvalidCredentials(message)
                }
                _ => AuthError::Other(format!("{status}: {message}")),
            });
        }

        let account: AccountResponse = response
            .json()
            .await
            .map_err(|e| AuthError::Other(format!("Malformed auth response: {e}")))?;

        Ok(AuthUser {
            user_id: account.local_id,
            email: account.email,
            id_token: account.id_token,
            refresh_token: account.refresh_token,
        })
    }
}
