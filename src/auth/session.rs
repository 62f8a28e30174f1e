//! Startup route resolution.
//!
//! On launch the app decides between the authenticated and the
//! unauthenticated start screen purely from the stored token: present,
//! unexpired, and carrying an extractable subject means the user lands
//! on the home screen; anything else routes to sign-up.

use tracing::debug;

use crate::auth::store::TokenStore;
use crate::auth::token;

/// Where the app should land after the splash screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartRoute {
    /// Authenticated start, carrying the username for the home screen
    Home(String),
    /// No usable session; the user must (re-)authenticate
    SignUp,
}

/// Decide the start route from the currently stored token. Local only -
/// no network call is made, and an unusable token is left in place for
/// the next explicit login to overwrite.
pub fn resolve_start_route(store: &TokenStore) -> StartRoute {
    let Some(stored) = store.get() else {
        debug!("No stored token, routing to sign-up");
        return StartRoute::SignUp;
    };
    if token::is_expired(&stored) {
        debug!("Stored token is expired, routing to sign-up");
        return StartRoute::SignUp;
    }
    match token::extract_subject(&stored) {
        Some(username) => {
            debug!(%username, "Valid session found, routing to home");
            StartRoute::Home(username)
        }
        None => {
            debug!("Token has no extractable subject, routing to sign-up");
            StartRoute::SignUp
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use chrono::{Duration, Utc};

    fn make_token(claims: &serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(claims.to_string().as_bytes());
        format!("{}.{}.sig", header, payload)
    }

    fn store() -> (tempfile::TempDir, TokenStore) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = TokenStore::new(dir.path().to_path_buf());
        (dir, store)
    }

    #[test]
    fn test_no_token_routes_to_signup() {
        let (_dir, store) = store();
        assert_eq!(resolve_start_route(&store), StartRoute::SignUp);
    }

    #[test]
    fn test_expired_token_routes_to_signup() {
        let (_dir, store) = store();
        let exp = (Utc::now() - Duration::hours(1)).timestamp();
        let token = make_token(&serde_json::json!({"sub": "alice", "exp": exp}));
        store.save(&token).expect("save token");
        assert_eq!(resolve_start_route(&store), StartRoute::SignUp);
    }

    #[test]
    fn test_token_without_subject_routes_to_signup() {
        let (_dir, store) = store();
        let exp = (Utc::now() + Duration::hours(1)).timestamp();
        let token = make_token(&serde_json::json!({"exp": exp}));
        store.save(&token).expect("save token");
        assert_eq!(resolve_start_route(&store), StartRoute::SignUp);
    }

    #[test]
    fn test_valid_token_routes_home() {
        let (_dir, store) = store();
        let exp = (Utc::now() + Duration::hours(1)).timestamp();
        let token = make_token(&serde_json::json!({"sub": "alice", "exp": exp}));
        store.save(&token).expect("save token");
        assert_eq!(
            resolve_start_route(&store),
            StartRoute::Home("alice".to_string())
        );
    }

    #[test]
    fn test_unusable_token_is_left_in_place() {
        let (_dir, store) = store();
        store.save("garbage").expect("save token");
        assert_eq!(resolve_start_route(&store), StartRoute::SignUp);
        // Routing does not delete the token bytes
        assert_eq!(store.get().as_deref(), Some("garbage"));
    }
}
