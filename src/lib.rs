//! PingMe core - client library for the PingMe reminder service.
//!
//! This crate is the non-visual core of the PingMe client: the session
//! token lifecycle and the authenticated request contract against the
//! remote reminder-management service. The UI layer (screens,
//! navigation) consumes it through three pieces:
//!
//! - [`auth::TokenStore`]: durable persistence of the single bearer token
//! - [`auth::token`]: local claims decoding for routing decisions
//! - [`api::ApiClient`]: HTTP gateway attaching the stored token to
//!   outgoing calls
//!
//! Authorization is enforced entirely server-side; the claims decoded
//! here drive navigation only.

pub mod api;
pub mod auth;
pub mod config;
pub mod models;

pub use api::{ApiClient, ApiError};
pub use auth::{resolve_start_route, StartRoute, TokenStore};
pub use config::Config;
pub use models::{Priority, Reminder, ReminderEntry, ReminderHistory, UserRecord};
