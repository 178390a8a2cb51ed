//! Dashboard Models
//!
//! Aggregate DTOs returned by the dashboard summary endpoints.

use serde::{Deserialize, Serialize};

/// Wire-level scope filter appended to aggregate endpoints
///
/// `scope` is one of "global", "warehouse", "shop"; `entity_id` is required
/// for the non-global scopes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeQuery {
    pub scope: String,
    pub entity_id: Option<String>,
}

impl ScopeQuery {
    pub fn global() -> Self {
        Self {
            scope: "global".to_string(),
            entity_id: None,
        }
    }

    /// Render as a URL query string (no leading `?`)
    pub fn to_query_string(&self) -> String {
        match &self.entity_id {
            Some(id) => format!("scope={}&entity_id={}", self.scope, id),
            None => format!("scope={}", self.scope),
        }
    }
}

/// Headline counters for the active operational scope
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_warehouses: u64,
    pub total_shops: u64,
    pub total_medicines: u64,
    pub total_employees: u64,
    pub pending_dispatches: u64,
    pub low_stock_items: u64,
}

/// Sales aggregates for the active operational scope
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalesSummary {
    pub today_sales: f64,
    pub month_sales: f64,
    pub today_invoices: u64,
    pub month_invoices: u64,
}

/// A single stock alert entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockAlert {
    pub medicine_id: String,
    pub medicine_name: String,
    /// Entity the alert belongs to (warehouse or shop id)
    pub entity_id: String,
    pub current_stock: i64,
    pub reorder_level: i64,
    /// "low_stock" or "expiring"
    pub alert_type: String,
    pub expiry_date: Option<chrono::NaiveDate>,
}
