//! Medical Shop Model

use serde::{Deserialize, Serialize};

/// Medical shop entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalShop {
    pub id: String,
    pub name: String,
    /// Short shop code (e.g. "MS-07")
    pub code: String,
    /// Warehouse this shop is supplied from
    pub warehouse_id: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub contact_phone: Option<String>,
    /// Drug license number displayed on invoices
    pub license_number: Option<String>,
    pub is_active: bool,
}

/// Create shop payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalShopCreate {
    pub name: String,
    pub code: String,
    pub warehouse_id: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub contact_phone: Option<String>,
    pub license_number: Option<String>,
}

/// Update shop payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalShopUpdate {
    pub name: Option<String>,
    pub warehouse_id: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub contact_phone: Option<String>,
    pub license_number: Option<String>,
    pub is_active: Option<bool>,
}
