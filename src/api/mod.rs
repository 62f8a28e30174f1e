//! REST API client module for the reminder-management service.
//!
//! This module provides the `ApiClient` for logging in, registering,
//! and reading/writing reminders against the remote service.
//!
//! The service uses JWT bearer token authentication; the token is
//! obtained through the login endpoint and persisted by the auth
//! module's `TokenStore`.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
