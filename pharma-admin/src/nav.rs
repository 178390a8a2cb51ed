//! Navigation visibility filter
//!
//! A static declarative menu forest is pruned against the current user's
//! role and permission set. Each node carries exactly one gate variant;
//! filtering is a pure function, preserves declaration order and never
//! deduplicates.

use shared::permissions::SUPER_ADMIN_ROLE;

use crate::resolver::PermissionResolver;

/// Visibility gate of one navigation node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavGate {
    /// No restriction declared
    Unrestricted,
    /// Visible iff the user holds any of these permission codes
    PermissionGated(Vec<String>),
    /// Legacy gate: visible iff the user's role is a member
    RoleGated(Vec<String>),
}

/// One node of the navigation tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub path: String,
    pub label: String,
    pub icon: String,
    pub gate: NavGate,
    /// Hidden specifically from the super admin role, regardless of
    /// permissions held
    pub hidden_from_super_admin: bool,
    pub children: Vec<NavItem>,
}

impl NavItem {
    pub fn new(path: impl Into<String>, label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
            icon: icon.into(),
            gate: NavGate::Unrestricted,
            hidden_from_super_admin: false,
            children: Vec::new(),
        }
    }

    /// Gate on any of the given permission codes
    pub fn permissions<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.gate = NavGate::PermissionGated(codes.into_iter().map(Into::into).collect());
        self
    }

    /// Gate on exact role membership (legacy)
    pub fn roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.gate = NavGate::RoleGated(roles.into_iter().map(Into::into).collect());
        self
    }

    /// Hide this node from the super admin role
    pub fn hidden_from_super_admin(mut self) -> Self {
        self.hidden_from_super_admin = true;
        self
    }

    /// Append a child node
    pub fn child(mut self, item: NavItem) -> Self {
        self.children.push(item);
        self
    }

    /// Whether a collapsible group should render expanded
    ///
    /// True iff the active route equals one of the children's paths or is
    /// nested under one (prefix match on `/`-delimited segments).
    pub fn auto_expand(&self, active_route: &str) -> bool {
        self.children
            .iter()
            .any(|child| is_route_under(active_route, &child.path))
    }
}

/// One of the three logical menu groups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSection {
    pub label: String,
    pub items: Vec<NavItem>,
}

impl NavSection {
    pub fn new(label: impl Into<String>, items: Vec<NavItem>) -> Self {
        Self {
            label: label.into(),
            items,
        }
    }
}

/// Segment-wise prefix match: `/a/b` is under `/a` but `/ab` is not
fn is_route_under(route: &str, path: &str) -> bool {
    let route = route.trim_end_matches('/');
    let path = path.trim_end_matches('/');
    if route == path {
        return true;
    }
    route.starts_with(path) && route.as_bytes().get(path.len()) == Some(&b'/')
}

/// Evaluate the gate of a single node
fn node_visible(item: &NavItem, role: &str, resolver: &PermissionResolver) -> bool {
    if item.hidden_from_super_admin && role == SUPER_ADMIN_ROLE {
        return false;
    }
    match &item.gate {
        NavGate::PermissionGated(codes) if !codes.is_empty() => resolver.has_any_permission(codes),
        NavGate::RoleGated(roles) if !roles.is_empty() => roles.iter().any(|r| r == role),
        // Empty gate lists carry no restriction
        _ => true,
    }
}

/// Filter one subtree; returns None when the node must not render
fn filter_item(item: &NavItem, role: &str, resolver: &PermissionResolver) -> Option<NavItem> {
    if !node_visible(item, role, resolver) {
        return None;
    }

    let had_children = !item.children.is_empty();
    let children: Vec<NavItem> = item
        .children
        .iter()
        .filter_map(|child| filter_item(child, role, resolver))
        .collect();

    // A group header with all children pruned is hidden; leaves stay
    if had_children && children.is_empty() {
        return None;
    }

    Some(NavItem {
        path: item.path.clone(),
        label: item.label.clone(),
        icon: item.icon.clone(),
        gate: item.gate.clone(),
        hidden_from_super_admin: item.hidden_from_super_admin,
        children,
    })
}

/// Prune the navigation forest for the current user
///
/// Pure: consumes the static tree, the user's role and the permission
/// resolver; preserves declaration order. Sections with no visible items
/// are dropped.
pub fn filter_navigation(
    sections: &[NavSection],
    role: &str,
    resolver: &PermissionResolver,
) -> Vec<NavSection> {
    sections
        .iter()
        .filter_map(|section| {
            let items: Vec<NavItem> = section
                .items
                .iter()
                .filter_map(|item| filter_item(item, role, resolver))
                .collect();
            if items.is_empty() {
                None
            } else {
                Some(NavSection::new(section.label.clone(), items))
            }
        })
        .collect()
}

/// The static default menu forest (three logical groups)
pub fn default_navigation() -> Vec<NavSection> {
    vec![
        NavSection::new(
            "Platform Management",
            vec![
                NavItem::new("/", "Dashboard", "gauge").permissions(["dashboard.view"]),
                NavItem::new("/warehouses", "Warehouse Management", "building")
                    .child(
                        NavItem::new("/warehouses", "View All Warehouses", "list")
                            .permissions(["warehouses.view"]),
                    )
                    .child(
                        NavItem::new("/warehouses/new", "Add Warehouse", "plus")
                            .permissions(["warehouses.create"]),
                    ),
                NavItem::new("/shops", "Shop Management", "store")
                    .child(
                        NavItem::new("/shops", "View All Shops", "list")
                            .permissions(["shops.view"]),
                    )
                    .child(
                        NavItem::new("/shops/new", "Add Shop", "plus")
                            .permissions(["shops.create"]),
                    ),
            ],
        ),
        NavSection::new(
            "Operational",
            vec![
                NavItem::new("/medicines", "Medicines", "pill")
                    .permissions(["medicines.view", "medicines.create"]),
                NavItem::new("/inventory", "Inventory", "boxes").permissions([
                    "inventory.view.global",
                    "inventory.view.warehouse",
                    "inventory.view.shop",
                ]),
                NavItem::new("/dispatches", "Dispatches", "truck")
                    .permissions(["dispatches.view"]),
                // Counter billing happens inside one shop; the super admin
                // operates above shop level and never sees it
                NavItem::new("/billing", "Billing Counter", "receipt")
                    .permissions(["billing.view"])
                    .hidden_from_super_admin(),
                NavItem::new("/employees", "Employees", "users")
                    .permissions(["employees.view"]),
                NavItem::new("/attendance", "Attendance", "calendar")
                    .roles(["warehouse_admin", "shop_admin"]),
                NavItem::new("/reports", "Reports", "chart").permissions([
                    "reports.view.global",
                    "reports.view.warehouse",
                    "reports.view.shop",
                ]),
            ],
        ),
        NavSection::new(
            "System",
            vec![
                NavItem::new("/users", "User Management", "user-cog")
                    .permissions(["users.manage"]),
                NavItem::new("/roles", "Roles & Permissions", "shield")
                    .permissions(["roles.manage"]),
                NavItem::new("/masters", "Master Data", "database")
                    .permissions(["masters.manage"]),
                NavItem::new("/audit", "Audit Log", "scroll").roles([SUPER_ADMIN_ROLE]),
                NavItem::new("/profile", "My Profile", "user"),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(codes: &[&str]) -> PermissionResolver {
        PermissionResolver::from_permissions(codes.iter().copied())
    }

    #[test]
    fn test_permission_gate_any_match() {
        let item = NavItem::new("/x", "X", "dot").permissions(["a", "b"]);

        assert!(node_visible(&item, "clerk", &resolver(&["a"])));
        assert!(node_visible(&item, "clerk", &resolver(&["b", "c"])));
        assert!(!node_visible(&item, "clerk", &resolver(&["c"])));
    }

    #[test]
    fn test_unrestricted_node_always_visible() {
        let item = NavItem::new("/profile", "My Profile", "user");
        assert!(node_visible(&item, "clerk", &resolver(&[])));
        assert!(node_visible(&item, "clerk", &PermissionResolver::new()));
    }

    #[test]
    fn test_empty_gate_lists_carry_no_restriction() {
        let item = NavItem::new("/x", "X", "dot").permissions(Vec::<String>::new());
        assert!(node_visible(&item, "clerk", &resolver(&[])));

        let item = NavItem::new("/x", "X", "dot").roles(Vec::<String>::new());
        assert!(node_visible(&item, "clerk", &resolver(&[])));
    }

    #[test]
    fn test_role_gate_exact_match() {
        let item = NavItem::new("/attendance", "Attendance", "calendar")
            .roles(["warehouse_admin", "shop_admin"]);

        assert!(node_visible(&item, "warehouse_admin", &resolver(&[])));
        assert!(!node_visible(&item, "pharmacist", &resolver(&[])));
    }

    #[test]
    fn test_hidden_from_super_admin_overrides_permissions() {
        let item = NavItem::new("/billing", "Billing Counter", "receipt")
            .permissions(["billing.view"])
            .hidden_from_super_admin();

        // Even with the permission held, the super admin never sees it
        assert!(!node_visible(
            &item,
            SUPER_ADMIN_ROLE,
            &resolver(&["billing.view"])
        ));
        assert!(node_visible(&item, "shop_admin", &resolver(&["billing.view"])));
    }

    #[test]
    fn test_parent_with_no_visible_children_is_hidden() {
        let group = NavItem::new("/warehouses", "Warehouse Management", "building")
            .child(NavItem::new("/warehouses", "View All", "list").permissions(["warehouses.view"]))
            .child(NavItem::new("/warehouses/new", "Add", "plus").permissions(["warehouses.create"]));

        let filtered = filter_item(&group, "clerk", &resolver(&["warehouses.view"])).unwrap();
        assert_eq!(filtered.children.len(), 1);
        assert_eq!(filtered.children[0].label, "View All");

        assert!(filter_item(&group, "clerk", &resolver(&["billing.view"])).is_none());
    }

    #[test]
    fn test_filtering_preserves_declaration_order() {
        let section = NavSection::new(
            "S",
            vec![
                NavItem::new("/a", "A", "dot").permissions(["p.a"]),
                NavItem::new("/b", "B", "dot").permissions(["p.b"]),
                NavItem::new("/c", "C", "dot").permissions(["p.c"]),
            ],
        );

        let visible = filter_navigation(&[section], "clerk", &resolver(&["p.c", "p.a"]));
        let labels: Vec<&str> = visible[0].items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["A", "C"]);
    }

    #[test]
    fn test_section_with_no_visible_items_is_dropped() {
        let sections = vec![
            NavSection::new("S1", vec![NavItem::new("/a", "A", "dot").permissions(["p.a"])]),
            NavSection::new("S2", vec![NavItem::new("/b", "B", "dot")]),
        ];

        let visible = filter_navigation(&sections, "clerk", &resolver(&[]));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].label, "S2");
    }

    #[test]
    fn test_auto_expand_segment_prefix() {
        let group = NavItem::new("/warehouses", "Warehouse Management", "building")
            .child(NavItem::new("/warehouses", "View All", "list"))
            .child(NavItem::new("/warehouses/new", "Add", "plus"));

        assert!(group.auto_expand("/warehouses"));
        assert!(group.auto_expand("/warehouses/new"));
        assert!(group.auto_expand("/warehouses/W1/stock"));
        assert!(!group.auto_expand("/warehousesX"));
        assert!(!group.auto_expand("/shops"));
    }

    #[test]
    fn test_default_navigation_for_unloaded_resolver() {
        // Before the permission set loads, only unrestricted leaves remain
        let visible = filter_navigation(&default_navigation(), "clerk", &PermissionResolver::new());
        let labels: Vec<&str> = visible
            .iter()
            .flat_map(|s| s.items.iter().map(|i| i.label.as_str()))
            .collect();
        assert_eq!(labels, ["My Profile"]);
    }
}
