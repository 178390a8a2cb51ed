//! Admin core error types

use thiserror::Error;

/// Error type for the admin core services
#[derive(Debug, Error)]
pub enum AdminError {
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Client error: {0}")]
    Client(#[from] pharma_client::ClientError),

    #[error("Storage error: {0}")]
    Storage(#[from] pharma_client::StorageError),
}

/// Result type for admin core operations
pub type AdminResult<T> = Result<T, AdminError>;
