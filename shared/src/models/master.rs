//! Master Data Models
//!
//! Shared reference/lookup lists used across many forms (categories,
//! units, tax slabs, etc.), fetched as one aggregate bundle.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One entry of a master-data list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasterItem {
    pub id: String,
    /// Stable lookup code (e.g. "GST_12")
    pub code: String,
    pub name: String,
    /// Free-form extra payload (e.g. tax percentage)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<serde_json::Value>,
}

impl MasterItem {
    pub fn new(id: impl Into<String>, code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            name: name.into(),
            extra: None,
        }
    }
}

/// Aggregate master-data bundle as returned by the unified endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MasterBundle {
    /// Lists keyed by master key ("categories", "units", "tax_slabs", ...)
    #[serde(flatten)]
    pub lists: HashMap<String, Vec<MasterItem>>,
}

/// Well-known master keys
pub mod master_keys {
    pub const CATEGORIES: &str = "categories";
    pub const UNITS: &str = "units";
    pub const TAX_SLABS: &str = "tax_slabs";
    pub const ROLES: &str = "roles";
    pub const MANUFACTURERS: &str = "manufacturers";
    pub const PAYMENT_METHODS: &str = "payment_methods";
}
