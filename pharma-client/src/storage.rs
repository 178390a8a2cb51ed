//! Durable client storage
//!
//! JSON-file persistence for the token pair and small UI preference flags.
//! Cleared on logout or on authentication failure. A monotonically bumped
//! generation stamp on the session file doubles as a best-effort signal for
//! other running instances to reload master data after a new login.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Persisted session tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token expiry as a Unix timestamp (seconds)
    pub expires_at: Option<u64>,
    /// Bumped on every write; other instances compare against their last
    /// seen value to detect a login from another window
    pub generation: u64,
}

impl StoredSession {
    pub fn new(access_token: String, refresh_token: String, expires_at: Option<u64>) -> Self {
        Self {
            access_token,
            refresh_token,
            expires_at,
            generation: 0,
        }
    }

    /// Parse the `exp` claim out of a JWT without verifying it
    pub fn parse_jwt_exp(token: &str) -> Option<u64> {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            return None;
        }

        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
        let payload_bytes = URL_SAFE_NO_PAD.decode(parts[1]).ok()?;
        let payload: serde_json::Value = serde_json::from_slice(&payload_bytes).ok()?;
        payload.get("exp")?.as_u64()
    }

    pub fn is_expired(&self) -> bool {
        if let Some(expires_at) = self.expires_at {
            let now = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs();
            return now > expires_at;
        }
        false
    }
}

/// Small persisted UI preference flags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiPreferences {
    pub theme: String,
    pub sidebar_collapsed: bool,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            sidebar_collapsed: false,
        }
    }
}

/// Durable session/preferences storage
#[derive(Debug, Clone)]
pub struct SessionStorage {
    session_path: PathBuf,
    prefs_path: PathBuf,
}

impl SessionStorage {
    /// Create storage rooted at a base directory
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        let base = base_path.into();
        Self {
            session_path: base.join("session.json"),
            prefs_path: base.join("preferences.json"),
        }
    }

    /// Ensure the base directory exists
    pub fn ensure_dir(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.session_path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Persist a session, bumping the generation stamp
    pub fn save_session(&self, session: &StoredSession) -> Result<(), StorageError> {
        self.ensure_dir()?;

        let mut session = session.clone();
        session.generation = self
            .load_session()
            .map(|prev| prev.generation + 1)
            .unwrap_or(1);

        let json = serde_json::to_string_pretty(&session)?;
        fs::write(&self.session_path, json)?;
        tracing::debug!(generation = session.generation, "Session persisted");
        Ok(())
    }

    /// Load the persisted session, if any
    pub fn load_session(&self) -> Option<StoredSession> {
        if !self.session_path.exists() {
            return None;
        }
        let json = fs::read_to_string(&self.session_path).ok()?;
        serde_json::from_str(&json).ok()
    }

    /// Current generation stamp (0 when no session is stored)
    pub fn session_generation(&self) -> u64 {
        self.load_session().map(|s| s.generation).unwrap_or(0)
    }

    /// Whether a session file exists
    pub fn has_session(&self) -> bool {
        self.session_path.exists()
    }

    /// Delete the persisted session
    pub fn clear_session(&self) -> Result<(), StorageError> {
        if self.session_path.exists() {
            fs::remove_file(&self.session_path)?;
            tracing::debug!("Stored session cleared");
        }
        Ok(())
    }

    /// Persist UI preferences
    pub fn save_preferences(&self, prefs: &UiPreferences) -> Result<(), StorageError> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(prefs)?;
        fs::write(&self.prefs_path, json)?;
        Ok(())
    }

    /// Load UI preferences, falling back to defaults
    pub fn load_preferences(&self) -> UiPreferences {
        if !self.prefs_path.exists() {
            return UiPreferences::default();
        }
        fs::read_to_string(&self.prefs_path)
            .ok()
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    /// Get the session file path
    pub fn session_path(&self) -> &Path {
        &self.session_path
    }
}
