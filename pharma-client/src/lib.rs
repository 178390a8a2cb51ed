//! Pharma Client - HTTP client for the pharmacy platform API
//!
//! Provides network-based HTTP calls to the platform REST API plus the
//! durable client-side session/preferences storage.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod storage;

pub use api::PlatformApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use storage::{SessionStorage, StorageError, StoredSession, UiPreferences};

// Re-export shared types for convenience
pub use shared::client::{ApiResponse, LoginRequest, LoginResponse, RefreshResponse};
pub use shared::models::UserInfo;
