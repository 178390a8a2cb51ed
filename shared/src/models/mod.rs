//! Data models
//!
//! Shared between the platform API and the admin client. All IDs are
//! server-assigned opaque strings.

pub mod dashboard;
pub mod master;
pub mod role;
pub mod shop;
pub mod user;
pub mod warehouse;

// Re-exports
pub use dashboard::*;
pub use master::*;
pub use role::*;
pub use shop::*;
pub use user::*;
pub use warehouse::*;
