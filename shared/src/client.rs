//! Client-related types shared between the platform API and this client
//!
//! Common request/response types used in API communication.

use serde::{Deserialize, Serialize};

use crate::models::UserInfo;

// Re-export ApiResponse from response module
pub use crate::response::ApiResponse;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token expiry as a Unix timestamp (seconds)
    pub expires_at: Option<u64>,
    pub user: UserInfo,
}

/// Token refresh request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Token refresh response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: Option<u64>,
}
