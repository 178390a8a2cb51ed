//! Warehouse Model

use serde::{Deserialize, Serialize};

/// Warehouse entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: String,
    pub name: String,
    /// Short warehouse code (e.g. "WH-NORTH")
    pub code: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub contact_phone: Option<String>,
    pub is_active: bool,
}

/// Create warehouse payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarehouseCreate {
    pub name: String,
    pub code: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub contact_phone: Option<String>,
}

/// Update warehouse payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarehouseUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub contact_phone: Option<String>,
    pub is_active: Option<bool>,
}
