//! Shared types for the pharmacy platform admin client
//!
//! Common types used across the client crates: data models, permission
//! catalog, API response structures and unified error codes.

pub mod client;
pub mod error;
pub mod models;
pub mod permissions;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::ErrorCode;
pub use response::{ApiResponse, PaginatedResponse, Pagination};
