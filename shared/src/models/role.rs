//! Role Model

use serde::{Deserialize, Serialize};

/// Entity type a role may be constrained to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Warehouse,
    Shop,
}

/// Role entity (RBAC)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    /// Stable role key (e.g. "warehouse_admin")
    pub name: String,
    pub description: Option<String>,
    /// Permission codes granted by this role
    #[serde(default)]
    pub permissions: Vec<String>,
    /// System roles are immutable from the UI
    pub is_system: bool,
    /// Constrains the role to warehouse- or shop-assigned users
    pub entity_type: Option<EntityType>,
    pub is_active: bool,
}

/// Create role payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleCreate {
    pub name: String,
    pub description: Option<String>,
    pub permissions: Vec<String>,
    pub entity_type: Option<EntityType>,
}

/// Update role payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub permissions: Option<Vec<String>>,
    pub is_active: Option<bool>,
}
