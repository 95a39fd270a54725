//! Persistent session storage
//!
//! The bearer token is kept as a single file under the platform data
//! directory. Its presence is the sole authorization signal; there is no
//! expiry or refresh. The token is loaded once per command into a
//! `Session` value that is passed explicitly to every API call.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{ClientError, Result};

/// An authenticated session: the opaque bearer token.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
}

pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Open a store at `path`, or at the default platform location.
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path: path.unwrap_or_else(Self::default_path),
        }
    }

    /// Default token file path
    pub fn default_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "redact", "redact") {
            dirs.data_dir().join("session.token")
        } else {
            PathBuf::from(".redact-session.token")
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored session, if any.
    pub fn load(&self) -> Result<Option<Session>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim().to_string();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(Session { token }))
                }
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Load the stored session, failing when none exists.
    pub fn require(&self) -> Result<Session> {
        self.load()?.ok_or(ClientError::NotLoggedIn)
    }

    /// Persist the session token, creating parent directories as needed.
    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, &session.token)?;
        Ok(())
    }

    /// Remove the stored token. Clearing an absent token is not an error.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, SessionStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(Some(dir.path().join("session.token")));
        (dir, store)
    }

    #[test]
    fn test_load_without_token() {
        let (_dir, store) = temp_store();
        assert!(store.load().unwrap().is_none());
        assert!(matches!(
            store.require().unwrap_err(),
            ClientError::NotLoggedIn
        ));
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let (_dir, store) = temp_store();
        store
            .save(&Session {
                token: "abc123".to_string(),
            })
            .unwrap();

        let session = store.require().unwrap();
        assert_eq!(session.token, "abc123");
    }

    #[test]
    fn test_clear_removes_token() {
        let (_dir, store) = temp_store();
        store
            .save(&Session {
                token: "abc123".to_string(),
            })
            .unwrap();

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());

        // Clearing again is a no-op, not an error.
        store.clear().unwrap();
    }

    #[test]
    fn test_blank_token_file_counts_as_logged_out() {
        let (_dir, store) = temp_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "\n").unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
