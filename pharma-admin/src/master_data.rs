//! Master-data cache
//!
//! Loads and memoizes the reference lists used by many forms (categories,
//! units, tax slabs, ...). When the aggregate fetch fails the cache falls
//! back silently to a built-in default dataset so dependent forms stay
//! usable; availability is preferred over consistency here.

use std::collections::HashMap;
use std::sync::Arc;

use pharma_client::PlatformApi;
use shared::models::master_keys;
use shared::models::MasterItem;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::RwLock;

use crate::events::{SessionEvent, SessionEvents};

/// Cached master-data lists keyed by master key
pub struct MasterDataCache {
    api: Arc<dyn PlatformApi>,
    lists: RwLock<HashMap<String, Vec<MasterItem>>>,
}

impl MasterDataCache {
    pub fn new(api: Arc<dyn PlatformApi>) -> Self {
        Self {
            api,
            lists: RwLock::new(HashMap::new()),
        }
    }

    /// Fetch the aggregate bundle and replace the cached lists
    ///
    /// A failed fetch installs the built-in defaults instead and logs a
    /// warning; callers see a usable cache either way.
    pub async fn refresh(&self) {
        match self.api.master_bundle().await {
            Ok(bundle) => {
                let mut lists = self.lists.write().await;
                *lists = bundle.lists;
                tracing::debug!(keys = lists.len(), "Master data refreshed");
            }
            Err(err) => {
                tracing::warn!(%err, "Master data fetch failed, using built-in defaults");
                let mut lists = self.lists.write().await;
                *lists = fallback_dataset();
            }
        }
    }

    /// Cached list for `key`, or an empty list if not yet loaded
    pub async fn get_master(&self, key: &str) -> Vec<MasterItem> {
        self.lists.read().await.get(key).cloned().unwrap_or_default()
    }

    /// Linear scan of the cached list for a matching code
    pub async fn find_by_code(&self, key: &str, code: &str) -> Option<MasterItem> {
        self.lists
            .read()
            .await
            .get(key)?
            .iter()
            .find(|item| item.code == code)
            .cloned()
    }

    /// Linear scan of the cached list for a matching id
    pub async fn find_by_id(&self, key: &str, id: &str) -> Option<MasterItem> {
        self.lists
            .read()
            .await
            .get(key)?
            .iter()
            .find(|item| item.id == id)
            .cloned()
    }

    /// Reload the cache whenever a login is observed
    ///
    /// Best-effort companion to the storage generation stamp: a login in
    /// this or another window refreshes the reference lists here. Lagged
    /// receivers skip missed events and keep listening.
    pub fn watch_logins(self: &Arc<Self>, events: &SessionEvents) -> tokio::task::JoinHandle<()> {
        let cache = Arc::clone(self);
        let mut rx = events.subscribe();
        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(SessionEvent::LoggedIn) => cache.refresh().await,
                    Ok(_) => {}
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::debug!(skipped, "Master data watcher lagged");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        })
    }
}

fn tax_slab(id: &str, code: &str, name: &str, percent: f64) -> MasterItem {
    let mut item = MasterItem::new(id, code, name);
    item.extra = Some(serde_json::json!({ "percent": percent }));
    item
}

/// Built-in default dataset used when the aggregate fetch fails
fn fallback_dataset() -> HashMap<String, Vec<MasterItem>> {
    let mut lists = HashMap::new();
    lists.insert(
        master_keys::CATEGORIES.to_string(),
        vec![
            MasterItem::new("cat-1", "TABLET", "Tablet"),
            MasterItem::new("cat-2", "CAPSULE", "Capsule"),
            MasterItem::new("cat-3", "SYRUP", "Syrup"),
            MasterItem::new("cat-4", "INJECTION", "Injection"),
            MasterItem::new("cat-5", "OINTMENT", "Ointment"),
            MasterItem::new("cat-6", "DROPS", "Drops"),
        ],
    );
    lists.insert(
        master_keys::UNITS.to_string(),
        vec![
            MasterItem::new("unit-1", "STRIP", "Strip"),
            MasterItem::new("unit-2", "BOTTLE", "Bottle"),
            MasterItem::new("unit-3", "BOX", "Box"),
            MasterItem::new("unit-4", "VIAL", "Vial"),
            MasterItem::new("unit-5", "TUBE", "Tube"),
        ],
    );
    lists.insert(
        master_keys::TAX_SLABS.to_string(),
        vec![
            tax_slab("tax-0", "GST_0", "GST 0%", 0.0),
            tax_slab("tax-5", "GST_5", "GST 5%", 5.0),
            tax_slab("tax-12", "GST_12", "GST 12%", 12.0),
            tax_slab("tax-18", "GST_18", "GST 18%", 18.0),
        ],
    );
    lists.insert(
        master_keys::ROLES.to_string(),
        vec![
            MasterItem::new("role-1", "super_admin", "Super Admin"),
            MasterItem::new("role-2", "warehouse_admin", "Warehouse Admin"),
            MasterItem::new("role-3", "shop_admin", "Shop Admin"),
            MasterItem::new("role-4", "pharmacist", "Pharmacist"),
        ],
    );
    lists.insert(
        master_keys::PAYMENT_METHODS.to_string(),
        vec![
            MasterItem::new("pay-1", "CASH", "Cash"),
            MasterItem::new("pay-2", "CARD", "Card"),
            MasterItem::new("pay-3", "UPI", "UPI"),
        ],
    );
    lists
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_dataset_is_usable() {
        let lists = fallback_dataset();
        for key in [
            master_keys::CATEGORIES,
            master_keys::UNITS,
            master_keys::TAX_SLABS,
            master_keys::ROLES,
            master_keys::PAYMENT_METHODS,
        ] {
            assert!(!lists.get(key).unwrap().is_empty(), "{key} empty");
        }
    }

    #[test]
    fn test_fallback_tax_slabs_carry_percent() {
        let lists = fallback_dataset();
        let slabs = lists.get(master_keys::TAX_SLABS).unwrap();
        let gst12 = slabs.iter().find(|s| s.code == "GST_12").unwrap();
        assert_eq!(gst12.extra.as_ref().unwrap()["percent"], 12.0);
    }
}
