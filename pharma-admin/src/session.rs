//! Session store
//!
//! Holds the authentication token and the resolved current-user profile
//! for one session. Tokens are persisted in durable client storage and
//! cleared on logout or authentication failure; an expired token observed
//! mid-session broadcasts `SessionExpired` for forced logout.

use std::sync::Arc;

use pharma_client::{PlatformApi, SessionStorage, StoredSession};
use shared::models::UserInfo;
use tokio::sync::RwLock;

use crate::error::{AdminError, AdminResult};
use crate::events::{SessionEvent, SessionEvents};
use crate::resolver::PermissionResolver;

/// Session store for the admin client
pub struct SessionStore {
    api: Arc<dyn PlatformApi>,
    storage: SessionStorage,
    events: SessionEvents,
    user: RwLock<Option<UserInfo>>,
}

impl SessionStore {
    pub fn new(api: Arc<dyn PlatformApi>, storage: SessionStorage, events: SessionEvents) -> Self {
        Self {
            api,
            storage,
            events,
            user: RwLock::new(None),
        }
    }

    /// Login with username and password
    ///
    /// Persists the token pair, installs the access token on the API client
    /// and publishes `LoggedIn` (other windows pick the new session up via
    /// the storage generation stamp).
    pub async fn login(&self, username: &str, password: &str) -> AdminResult<UserInfo> {
        let response = match self.api.login(username, password).await {
            Ok(response) => response,
            Err(err) if err.is_auth_failure() => return Err(AdminError::InvalidCredentials),
            Err(err) => return Err(err.into()),
        };

        let expires_at = response
            .expires_at
            .or_else(|| StoredSession::parse_jwt_exp(&response.access_token));
        let session = StoredSession::new(
            response.access_token.clone(),
            response.refresh_token.clone(),
            expires_at,
        );
        if let Err(err) = self.storage.save_session(&session) {
            // A session that cannot be persisted still works for this window
            tracing::warn!(%err, "Failed to persist session");
        }

        self.api.set_token(Some(response.access_token));
        *self.user.write().await = Some(response.user.clone());
        self.events.publish(SessionEvent::LoggedIn);

        tracing::info!(user = %response.user.username, role = %response.user.role, "Logged in");
        Ok(response.user)
    }

    /// Restore a session from durable storage on startup
    ///
    /// An expired access token is exchanged via the stored refresh token
    /// first. Returns `None` when no usable session exists; a rejected
    /// token pair is cleared rather than surfaced as an error.
    pub async fn restore(&self) -> AdminResult<Option<UserInfo>> {
        let Some(mut session) = self.storage.load_session() else {
            return Ok(None);
        };

        let mut refreshed = false;
        if session.is_expired() {
            tracing::info!("Stored access token expired, attempting refresh");
            match self.api.refresh_session(&session.refresh_token).await {
                Ok(tokens) => {
                    let expires_at = tokens
                        .expires_at
                        .or_else(|| StoredSession::parse_jwt_exp(&tokens.access_token));
                    session =
                        StoredSession::new(tokens.access_token, tokens.refresh_token, expires_at);
                    if let Err(err) = self.storage.save_session(&session) {
                        tracing::warn!(%err, "Failed to persist refreshed session");
                    }
                    refreshed = true;
                }
                Err(err) if err.is_auth_failure() => {
                    tracing::info!("Refresh token rejected, clearing stored session");
                    self.storage.clear_session()?;
                    return Ok(None);
                }
                Err(err) => {
                    // Network trouble: keep the stored session for a later retry
                    return Err(err.into());
                }
            }
        }

        self.api.set_token(Some(session.access_token.clone()));
        match self.api.me().await {
            Ok(user) => {
                *self.user.write().await = Some(user.clone());
                // A refresh wrote a new token pair, which counts as a login
                // for listeners like the master-data watcher
                if refreshed {
                    self.events.publish(SessionEvent::LoggedIn);
                }
                tracing::info!(user = %user.username, "Session restored");
                Ok(Some(user))
            }
            Err(err) if err.is_auth_failure() => {
                self.expire().await?;
                Ok(None)
            }
            Err(err) => {
                // Network trouble: keep the stored session for a later retry
                self.api.set_token(None);
                Err(err.into())
            }
        }
    }

    /// Re-fetch the current-user profile
    pub async fn refresh(&self) -> AdminResult<UserInfo> {
        match self.api.me().await {
            Ok(user) => {
                *self.user.write().await = Some(user.clone());
                Ok(user)
            }
            Err(err) if err.is_auth_failure() => {
                self.expire().await?;
                Err(AdminError::NotAuthenticated)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Explicit logout
    pub async fn logout(&self) -> AdminResult<()> {
        if let Err(err) = self.api.logout().await {
            // Local state is cleared regardless of the server call outcome
            tracing::warn!(%err, "Logout request failed");
        }
        self.api.set_token(None);
        self.storage.clear_session()?;
        *self.user.write().await = None;
        self.events.publish(SessionEvent::LoggedOut);
        Ok(())
    }

    /// Forced cleanup after the token was rejected mid-session
    async fn expire(&self) -> AdminResult<()> {
        tracing::info!("Session token rejected, forcing logout");
        self.api.set_token(None);
        self.storage.clear_session()?;
        *self.user.write().await = None;
        self.events.publish(SessionEvent::SessionExpired);
        Ok(())
    }

    /// Cached current-user profile, if logged in
    pub async fn current_user(&self) -> Option<UserInfo> {
        self.user.read().await.clone()
    }

    /// Permission resolver over the current user's grants
    ///
    /// Unloaded (fail-closed) while nobody is logged in.
    pub async fn resolver(&self) -> PermissionResolver {
        match self.user.read().await.as_ref() {
            Some(user) => PermissionResolver::from_permissions(user.permissions.clone()),
            None => PermissionResolver::new(),
        }
    }
}
