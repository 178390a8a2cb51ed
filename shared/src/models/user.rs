//! User Model

use serde::{Deserialize, Serialize};

/// Resolved current-user profile
///
/// A user is assigned to at most one of {warehouse, shop}. The super admin
/// role has neither and operates globally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Role key (e.g. "super_admin", "warehouse_admin")
    pub role: String,
    /// Resolved permission codes granted through the role
    #[serde(default)]
    pub permissions: Vec<String>,
    /// Warehouse assignment, mutually exclusive with `shop_id`
    pub warehouse_id: Option<String>,
    /// Shop assignment, mutually exclusive with `warehouse_id`
    pub shop_id: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl UserInfo {
    /// Whether this user holds the top-level administrative role
    pub fn is_super_admin(&self) -> bool {
        self.role == crate::permissions::SUPER_ADMIN_ROLE
    }
}

/// Create user payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub username: String,
    pub password: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: String,
    pub warehouse_id: Option<String>,
    pub shop_id: Option<String>,
}

/// Update user payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub warehouse_id: Option<String>,
    pub shop_id: Option<String>,
    pub is_active: Option<bool>,
}
