//! Authentication module for managing the session token lifecycle.
//!
//! This module provides:
//! - `TokenStore`: durable persistence of the single bearer token
//! - `token`: local, signature-unverified claims decoding
//! - `session`: startup route resolution from the stored token
//!
//! The token is issued by the reminder service at login and accepted at
//! face value; nothing here is an authorization check.

pub mod session;
pub mod store;
pub mod token;

pub use session::{resolve_start_route, StartRoute};
pub use store::TokenStore;
