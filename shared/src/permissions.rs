//! Permission Definitions
//!
//! Permission codes follow the form `module.action[.scope]`, where the
//! optional scope suffix is one of `global`, `warehouse`, `shop`
//! (e.g. `inventory.view.global`). A code uniquely identifies one
//! grantable capability.

/// Role key of the top-level administrative role.
///
/// This role operates globally, has no warehouse/shop assignment and is the
/// only role allowed to switch operational scope.
pub const SUPER_ADMIN_ROLE: &str = "super_admin";

/// Permission scope suffixes
pub const SCOPE_SUFFIXES: &[&str] = &["global", "warehouse", "shop"];

/// Grantable permission catalog
pub const ALL_PERMISSIONS: &[&str] = &[
    // === Dashboard ===
    "dashboard.view",
    // === Platform management ===
    "warehouses.view",
    "warehouses.create",
    "warehouses.edit",
    "warehouses.delete",
    "shops.view",
    "shops.create",
    "shops.edit",
    "shops.delete",
    // === Inventory (scoped) ===
    "inventory.view.global",
    "inventory.view.warehouse",
    "inventory.view.shop",
    "inventory.adjust.warehouse",
    "inventory.adjust.shop",
    // === Medicines and dispatch ===
    "medicines.view",
    "medicines.create",
    "medicines.edit",
    "medicines.delete",
    "dispatches.view",
    "dispatches.create",
    "dispatches.receive",
    // === Billing ===
    "billing.view",
    "billing.create",
    "billing.refund",
    // === HR ===
    "employees.view",
    "employees.create",
    "employees.edit",
    "employees.delete",
    "attendance.view",
    "attendance.manage",
    // === Reports ===
    "reports.view.global",
    "reports.view.warehouse",
    "reports.view.shop",
    // === System ===
    "users.manage",
    "roles.manage",
    "masters.manage",
    "settings.manage",
];

/// Default permission bundle for warehouse administrators
pub const DEFAULT_WAREHOUSE_ADMIN_PERMISSIONS: &[&str] = &[
    "dashboard.view",
    "warehouses.view",
    "inventory.view.warehouse",
    "inventory.adjust.warehouse",
    "medicines.view",
    "dispatches.view",
    "dispatches.create",
    "employees.view",
    "attendance.view",
    "reports.view.warehouse",
];

/// Default permission bundle for shop administrators
pub const DEFAULT_SHOP_ADMIN_PERMISSIONS: &[&str] = &[
    "dashboard.view",
    "shops.view",
    "inventory.view.shop",
    "inventory.adjust.shop",
    "medicines.view",
    "dispatches.view",
    "dispatches.receive",
    "billing.view",
    "billing.create",
    "employees.view",
    "reports.view.shop",
];

/// Default permission bundle for pharmacists (shop counter staff)
pub const DEFAULT_PHARMACIST_PERMISSIONS: &[&str] = &[
    "dashboard.view",
    "medicines.view",
    "inventory.view.shop",
    "billing.view",
    "billing.create",
];

/// Get the default permission bundle for a role key
///
/// The super admin is granted the full catalog; the backend remains the
/// authority for what a user actually holds.
pub fn get_default_permissions(role_key: &str) -> Vec<String> {
    match role_key {
        SUPER_ADMIN_ROLE => ALL_PERMISSIONS.iter().map(|s| s.to_string()).collect(),
        "warehouse_admin" => DEFAULT_WAREHOUSE_ADMIN_PERMISSIONS
            .iter()
            .map(|s| s.to_string())
            .collect(),
        "shop_admin" => DEFAULT_SHOP_ADMIN_PERMISSIONS
            .iter()
            .map(|s| s.to_string())
            .collect(),
        "pharmacist" => DEFAULT_PHARMACIST_PERMISSIONS
            .iter()
            .map(|s| s.to_string())
            .collect(),
        _ => vec![],
    }
}

/// Validate if a permission string is a catalog entry
pub fn is_valid_permission(permission: &str) -> bool {
    ALL_PERMISSIONS.contains(&permission)
}

/// Extract the module part of a permission code (text before the first `.`)
pub fn permission_module(permission: &str) -> Option<&str> {
    let module = permission.split('.').next()?;
    if module.is_empty() || module.len() == permission.len() {
        None
    } else {
        Some(module)
    }
}

/// Extract the scope suffix of a permission code, if present
pub fn permission_scope(permission: &str) -> Option<&str> {
    let last = permission.rsplit('.').next()?;
    SCOPE_SUFFIXES.contains(&last).then_some(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_module() {
        assert_eq!(permission_module("inventory.view.global"), Some("inventory"));
        assert_eq!(permission_module("billing.create"), Some("billing"));
        assert_eq!(permission_module("billing"), None);
        assert_eq!(permission_module(".view"), None);
    }

    #[test]
    fn test_permission_scope() {
        assert_eq!(permission_scope("inventory.view.global"), Some("global"));
        assert_eq!(permission_scope("inventory.view.shop"), Some("shop"));
        assert_eq!(permission_scope("billing.create"), None);
    }

    #[test]
    fn test_default_bundles_are_catalog_entries() {
        for role in ["super_admin", "warehouse_admin", "shop_admin", "pharmacist"] {
            for code in get_default_permissions(role) {
                assert!(is_valid_permission(&code), "{role}: {code} not in catalog");
            }
        }
    }

    #[test]
    fn test_unknown_role_has_no_defaults() {
        assert!(get_default_permissions("intern").is_empty());
    }
}
