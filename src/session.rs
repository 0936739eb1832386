//! Persisted auth session.
//!
//! The session holds the signed-in user's profile and the opaque bearer
//! token issued by the auth collaborator. The token is never inspected
//! client-side; it is attached verbatim to authenticated requests.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::StoreError;

/// Signed-in user profile, as the auth collaborator reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

/// An authenticated session: profile plus opaque bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: UserProfile,
    pub token: String,
}

/// File-backed session storage.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the persisted session, if any. Malformed data is treated as
    /// signed-out rather than an error.
    pub fn load(&self) -> Option<Session> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&content) {
            Ok(session) => Some(session),
            Err(err) => {
                warn!(path = %self.path.display(), %err, "discarding malformed session file");
                None
            }
        }
    }

    pub fn save(&self, session: &Session) -> Result<(), StoreError> {
        let json =
            serde_json::to_string(session).map_err(|source| StoreError::SerializeFailed {
                what: "session",
                source,
            })?;
        std::fs::write(&self.path, json).map_err(|source| StoreError::WriteFailed {
            path: self.path.clone(),
            source,
        })
    }

    /// Remove the persisted session (sign out). Missing file is fine.
    pub fn clear(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::WriteFailed {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_session() -> Session {
        Session {
            user: UserProfile {
                name: "Priya".to_string(),
                email: "priya@example.com".to_string(),
            },
            token: "opaque.bearer.token".to_string(),
        }
    }

    #[test]
    fn test_load_missing_returns_none() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));
        assert!(store.load().is_none());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));
        let session = sample_session();
        store.save(&session).unwrap();
        assert_eq!(store.load(), Some(session));
    }

    #[test]
    fn test_malformed_session_is_signed_out() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "][").unwrap();
        let store = SessionStore::new(path);
        assert!(store.load().is_none());
    }

    #[test]
    fn test_clear_removes_session() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));
        store.save(&sample_session()).unwrap();
        store.clear().unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_clear_without_session_is_ok() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));
        store.clear().unwrap();
    }
}
