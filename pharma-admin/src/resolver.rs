//! Permission resolver
//!
//! Pure lookups against the in-memory permission set of the current user.
//! Every check fails closed while no permission set is loaded: the UI may
//! briefly hide entries during startup, never show them too early.

use std::collections::HashSet;

/// Resolver over the user's granted permission codes
#[derive(Debug, Clone, Default)]
pub struct PermissionResolver {
    /// None until a user profile has been loaded
    permissions: Option<HashSet<String>>,
}

impl PermissionResolver {
    /// Create an unloaded resolver (all checks return false)
    pub fn new() -> Self {
        Self { permissions: None }
    }

    /// Create a resolver from granted permission codes
    pub fn from_permissions<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            permissions: Some(codes.into_iter().map(Into::into).collect()),
        }
    }

    /// Replace the permission set (on login or profile refresh)
    pub fn load<I, S>(&mut self, codes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permissions = Some(codes.into_iter().map(Into::into).collect());
    }

    /// Drop the permission set (on logout); checks fail closed again
    pub fn clear(&mut self) {
        self.permissions = None;
    }

    /// Whether a permission set has been loaded
    pub fn is_loaded(&self) -> bool {
        self.permissions.is_some()
    }

    /// True iff `code` is a member of the resolved permission set
    pub fn has_permission(&self, code: &str) -> bool {
        match &self.permissions {
            Some(set) => set.contains(code),
            None => false,
        }
    }

    /// True iff at least one of `codes` is held
    pub fn has_any_permission<S: AsRef<str>>(&self, codes: &[S]) -> bool {
        codes.iter().any(|c| self.has_permission(c.as_ref()))
    }

    /// True iff every element of `codes` is held
    ///
    /// Vacuously true for an empty slice once a set is loaded.
    pub fn has_all_permissions<S: AsRef<str>>(&self, codes: &[S]) -> bool {
        if self.permissions.is_none() {
            return false;
        }
        codes.iter().all(|c| self.has_permission(c.as_ref()))
    }

    /// True iff any held code starts with `"{module}."`
    pub fn has_module_access(&self, module: &str) -> bool {
        let Some(set) = &self.permissions else {
            return false;
        };
        let prefix = format!("{}.", module);
        set.iter().any(|code| code.starts_with(&prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unloaded_resolver_fails_closed() {
        let resolver = PermissionResolver::new();
        assert!(!resolver.is_loaded());
        assert!(!resolver.has_permission("billing.view"));
        assert!(!resolver.has_any_permission(&["billing.view", "reports.view.global"]));
        assert!(!resolver.has_all_permissions(&["billing.view"]));
        assert!(!resolver.has_all_permissions::<&str>(&[]));
        assert!(!resolver.has_module_access("billing"));
    }

    #[test]
    fn test_has_permission_membership() {
        let resolver = PermissionResolver::from_permissions(["billing.view", "billing.create"]);
        assert!(resolver.has_permission("billing.view"));
        assert!(resolver.has_permission("billing.create"));
        assert!(!resolver.has_permission("billing.refund"));
        assert!(!resolver.has_permission("billing"));
    }

    #[test]
    fn test_any_and_all() {
        let resolver = PermissionResolver::from_permissions(["warehouses.view"]);
        assert!(resolver.has_any_permission(&["warehouses.view", "warehouses.create"]));
        assert!(!resolver.has_any_permission(&["warehouses.create", "warehouses.delete"]));
        assert!(!resolver.has_any_permission::<&str>(&[]));

        assert!(resolver.has_all_permissions(&["warehouses.view"]));
        assert!(!resolver.has_all_permissions(&["warehouses.view", "warehouses.create"]));
        assert!(resolver.has_all_permissions::<&str>(&[]));
    }

    #[test]
    fn test_module_access_is_prefix_based() {
        let resolver = PermissionResolver::from_permissions(["inventory.view.warehouse"]);
        assert!(resolver.has_module_access("inventory"));
        // "inv" is not a module of "inventory.view.warehouse"
        assert!(!resolver.has_module_access("inv"));
        assert!(!resolver.has_module_access("billing"));
    }

    #[test]
    fn test_empty_set_is_loaded_but_grants_nothing() {
        let resolver = PermissionResolver::from_permissions(Vec::<String>::new());
        assert!(resolver.is_loaded());
        assert!(!resolver.has_permission("billing.view"));
        // Vacuous truth once loaded
        assert!(resolver.has_all_permissions::<&str>(&[]));
    }

    #[test]
    fn test_clear_returns_to_fail_closed() {
        let mut resolver = PermissionResolver::from_permissions(["billing.view"]);
        assert!(resolver.has_permission("billing.view"));
        resolver.clear();
        assert!(!resolver.has_permission("billing.view"));
        assert!(!resolver.is_loaded());
    }
}
