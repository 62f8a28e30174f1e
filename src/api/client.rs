//! API client for communicating with the reminder-management service.
//!
//! This module provides the `ApiClient` struct for the four service
//! operations: login, register, reminder upsert, and history fetch.
//! Authenticated calls read the bearer token from the `TokenStore`
//! immediately before dispatch - the gateway never caches it, so a
//! logout or token refresh between calls is observed on the next call.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde_json::json;
use tracing::{debug, info};

use crate::auth::store::TokenStore;
use crate::auth::token;
use crate::models::{Reminder, ReminderEntry, ReminderHistory, UserRecord};

use super::ApiError;

/// HTTP request timeout in seconds.
/// The original client relied on transport defaults; a bound is applied
/// here so a dead service fails the flow instead of hanging it.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Literal body the login endpoint returns for rejected credentials.
/// Value equality against this string is the wire contract's
/// success/failure discriminator; it is translated into
/// `ApiError::InvalidCredentials` here and never escapes the gateway.
const LOGIN_FAILURE_SENTINEL: &str = "failure";

/// API client for the reminder service.
/// Clone is cheap - reqwest::Client uses Arc internally for connection
/// pooling, and the token store handle is shared.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    store: Arc<TokenStore>,
}

impl ApiClient {
    /// Create a new API client against the given base URL
    pub fn new(base_url: impl Into<String>, store: Arc<TokenStore>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            store,
        })
    }

    /// Exchange credentials for a bearer token.
    ///
    /// The response body is the raw token string, or the failure
    /// sentinel for rejected credentials.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let url = format!("{}/login", self.base_url);
        let body = json!({ "username": username, "password": password });

        debug!(url = %url, "Sending login request");
        let response = self.client.post(&url).json(&body).send().await?;
        let response = Self::check_response(response).await?;

        let body = response.text().await?;
        Self::parse_login_body(body)
    }

    /// Login, persist the returned token, and hand back the subject
    /// decoded from it for navigation. `None` means the token carried
    /// no identity the home screen could use.
    pub async fn login_and_save(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<String>, ApiError> {
        let bearer = self.login(username, password).await?;
        self.store
            .save(&bearer)
            .map_err(|e| ApiError::Storage(e.to_string()))?;
        info!("Login succeeded, token persisted");
        Ok(token::extract_subject(&bearer))
    }

    /// Register a new account. The service echoes the created record.
    pub async fn register(&self, user: &UserRecord) -> Result<UserRecord, ApiError> {
        let url = format!("{}/register", self.base_url);

        debug!(url = %url, username = %user.username, "Sending registration request");
        let response = self.client.post(&url).json(user).send().await?;
        let response = Self::check_response(response).await?;

        let text = response.text().await?;
        serde_json::from_str(&text)
            .map_err(|e| ApiError::InvalidResponse(format!("register echo: {}", e)))
    }

    /// Upsert a reminder for the user. The same verb is used whether or
    /// not a reminder already exists for the slot; the service echoes
    /// the stored record.
    pub async fn set_reminder(
        &self,
        username: &str,
        reminder: &Reminder,
    ) -> Result<Reminder, ApiError> {
        let url = format!("{}/reminderManagement/{}", self.base_url, username);
        let bearer = self.current_token()?;

        debug!(url = %url, "Upserting reminder");
        let response = self
            .client
            .put(&url)
            .bearer_auth(bearer)
            .json(reminder)
            .send()
            .await?;
        let response = Self::check_response(response).await?;

        let text = response.text().await?;
        serde_json::from_str(&text)
            .map_err(|e| ApiError::InvalidResponse(format!("reminder echo: {}", e)))
    }

    /// Fetch the user's reminder history
    pub async fn get_history(&self, username: &str) -> Result<Vec<ReminderEntry>, ApiError> {
        let url = format!("{}/reminderManagement/{}", self.base_url, username);
        let bearer = self.current_token()?;

        debug!(url = %url, "Fetching reminder history");
        let response = self.client.get(&url).bearer_auth(bearer).send().await?;
        let response = Self::check_response(response).await?;

        let text = response.text().await?;
        let history: ReminderHistory = serde_json::from_str(&text)
            .map_err(|e| ApiError::InvalidResponse(format!("history response: {}", e)))?;
        Ok(history.reminders)
    }

    /// Current token from the store, read fresh for this call.
    /// A missing token short-circuits before anything is sent.
    fn current_token(&self) -> Result<String, ApiError> {
        self.store.get().ok_or(ApiError::NotAuthenticated)
    }

    /// Translate the login body at the gateway boundary
    fn parse_login_body(body: String) -> Result<String, ApiError> {
        if body == LOGIN_FAILURE_SENTINEL {
            debug!("Login rejected by service");
            Err(ApiError::InvalidCredentials)
        } else {
            Ok(body)
        }
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }
}
