//! Durable storage for the session token.
//!
//! Exactly one bearer token is persisted at a time, as a single named
//! entry in a JSON preference file private to the application. A save
//! overwrites the previous value; delete is idempotent. The store is
//! constructed once per process, with its directory injected, and is
//! passed by reference to whatever needs it.

use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Preference file name in the application directory
const PREFS_FILE: &str = "user_prefs.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct Prefs {
    #[serde(skip_serializing_if = "Option::is_none")]
    jwt_token: Option<String>,
}

pub struct TokenStore {
    prefs_dir: PathBuf,
    // Serializes save/get/delete per process; last write wins
    lock: Mutex<()>,
}

impl TokenStore {
    pub fn new(prefs_dir: PathBuf) -> Self {
        Self {
            prefs_dir,
            lock: Mutex::new(()),
        }
    }

    /// Store the token, overwriting any existing value
    pub fn save(&self, token: &str) -> Result<()> {
        let _guard = self.guard();
        let mut prefs = self.read_prefs();
        prefs.jwt_token = Some(token.to_string());
        self.write_prefs(&prefs)
    }

    /// The currently stored token, if any. Absence is a normal result;
    /// unreadable preference files also read as absent.
    pub fn get(&self) -> Option<String> {
        let _guard = self.guard();
        self.read_prefs().jwt_token
    }

    /// Remove the stored token. Deleting when nothing is stored is not
    /// an error.
    pub fn delete(&self) -> Result<()> {
        let _guard = self.guard();
        let mut prefs = self.read_prefs();
        if prefs.jwt_token.take().is_some() {
            self.write_prefs(&prefs)?;
        }
        Ok(())
    }

    fn guard(&self) -> std::sync::MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn read_prefs(&self) -> Prefs {
        let path = self.prefs_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(prefs) => prefs,
                Err(e) => {
                    warn!(error = %e, "Unparsable preference file, treating as empty");
                    Prefs::default()
                }
            },
            Err(_) => Prefs::default(),
        }
    }

    fn write_prefs(&self, prefs: &Prefs) -> Result<()> {
        let path = self.prefs_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .context("Failed to create preference directory")?;
        }
        let contents = serde_json::to_string_pretty(prefs)?;
        std::fs::write(&path, contents).context("Failed to write preference file")?;
        Ok(())
    }

    fn prefs_path(&self) -> PathBuf {
        self.prefs_dir.join(PREFS_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, TokenStore) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = TokenStore::new(dir.path().to_path_buf());
        (dir, store)
    }

    #[test]
    fn test_save_then_get() {
        let (_dir, store) = store();
        store.save("abc.def.ghi").expect("save token");
        assert_eq!(store.get().as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn test_get_before_any_save() {
        let (_dir, store) = store();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_save_overwrites() {
        let (_dir, store) = store();
        store.save("first").expect("save first");
        store.save("second").expect("save second");
        assert_eq!(store.get().as_deref(), Some("second"));
    }

    #[test]
    fn test_delete_then_get() {
        let (_dir, store) = store();
        store.save("token").expect("save token");
        store.delete().expect("delete token");
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let (_dir, store) = store();
        store.delete().expect("delete with nothing stored");
        store.save("token").expect("save token");
        store.delete().expect("first delete");
        store.delete().expect("second delete");
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_survives_reopen() {
        let dir = tempfile::tempdir().expect("create temp dir");
        {
            let store = TokenStore::new(dir.path().to_path_buf());
            store.save("persistent").expect("save token");
        }
        // New store instance over the same directory sees the value
        let store = TokenStore::new(dir.path().to_path_buf());
        assert_eq!(store.get().as_deref(), Some("persistent"));
    }

    #[test]
    fn test_corrupt_prefs_read_as_absent() {
        let (dir, store) = store();
        std::fs::write(dir.path().join(PREFS_FILE), "{not json").expect("write garbage");
        assert_eq!(store.get(), None);

        // A save repairs the file
        store.save("fresh").expect("save over corrupt file");
        assert_eq!(store.get().as_deref(), Some("fresh"));
    }
}
