//! Operational scope manager
//!
//! Resolves the active operating context (global / single warehouse /
//! single shop) from the user's role and assignment. Only the super admin
//! may switch context; every other role is pinned to its derived scope for
//! the session lifetime.

use std::sync::Arc;

use pharma_client::PlatformApi;
use shared::models::{EntityType, MedicalShop, ScopeQuery, UserInfo, Warehouse};
use tokio::sync::RwLock;

/// Administrative breadth the session operates under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    Global,
    Warehouse,
    Shop,
}

impl ScopeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScopeKind::Global => "global",
            ScopeKind::Warehouse => "warehouse",
            ScopeKind::Shop => "shop",
        }
    }
}

/// The specific warehouse or shop bound to the current scope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveEntity {
    pub id: String,
    pub name: String,
    pub entity_type: EntityType,
}

impl ActiveEntity {
    fn from_warehouse(w: &Warehouse) -> Self {
        Self {
            id: w.id.clone(),
            name: w.name.clone(),
            entity_type: EntityType::Warehouse,
        }
    }

    fn from_shop(s: &MedicalShop) -> Self {
        Self {
            id: s.id.clone(),
            name: s.name.clone(),
            entity_type: EntityType::Shop,
        }
    }
}

/// Resolved scope state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeState {
    pub kind: ScopeKind,
    pub active_entity: Option<ActiveEntity>,
}

impl ScopeState {
    /// Wire-level filter for the aggregate endpoints
    pub fn to_query(&self) -> ScopeQuery {
        ScopeQuery {
            scope: self.kind.as_str().to_string(),
            entity_id: self.active_entity.as_ref().map(|e| e.id.clone()),
        }
    }
}

/// Selector choices available for context switching
#[derive(Debug, Clone, Default)]
pub struct ScopeCandidates {
    pub warehouses: Vec<Warehouse>,
    pub shops: Vec<MedicalShop>,
}

/// Operational scope manager
///
/// Holds the single-writer scope state for one session. Construction
/// derives the initial state from the user record and enumerates selector
/// candidates over the API; enumeration failures degrade to empty lists
/// without blocking resolution.
pub struct ScopeManager {
    api: Arc<dyn PlatformApi>,
    user: UserInfo,
    state: RwLock<ScopeState>,
    candidates: RwLock<ScopeCandidates>,
}

impl ScopeManager {
    /// Derive the initial scope for a user and enumerate candidates
    pub async fn resolve(api: Arc<dyn PlatformApi>, user: UserInfo) -> Self {
        let manager = Self {
            state: RwLock::new(Self::derive_initial(&user)),
            candidates: RwLock::new(ScopeCandidates::default()),
            api,
            user,
        };
        manager.enumerate_candidates().await;
        manager
    }

    /// Initial scope from role and assignment, before any network call
    ///
    /// The super admin always starts global with no active entity, even
    /// when only one warehouse exists.
    fn derive_initial(user: &UserInfo) -> ScopeState {
        if user.is_super_admin() {
            return ScopeState {
                kind: ScopeKind::Global,
                active_entity: None,
            };
        }
        if user.warehouse_id.is_some() {
            return ScopeState {
                kind: ScopeKind::Warehouse,
                active_entity: None,
            };
        }
        if user.shop_id.is_some() {
            return ScopeState {
                kind: ScopeKind::Shop,
                active_entity: None,
            };
        }
        tracing::warn!(
            user = %user.username,
            role = %user.role,
            "User has no warehouse/shop assignment, falling back to global scope"
        );
        ScopeState {
            kind: ScopeKind::Global,
            active_entity: None,
        }
    }

    /// Enumerate selector candidates and bind the assigned entity
    ///
    /// Super admin sees every warehouse and shop; other roles see only
    /// their assigned entity. A failed lookup leaves the active entity
    /// unset but never changes the scope kind.
    async fn enumerate_candidates(&self) {
        if self.user.is_super_admin() {
            let (warehouses, shops) =
                tokio::join!(self.api.list_warehouses(), self.api.list_shops());

            let warehouses = warehouses.unwrap_or_else(|err| {
                tracing::warn!(%err, "Warehouse enumeration failed, selector will be empty");
                Vec::new()
            });
            let shops = shops.unwrap_or_else(|err| {
                tracing::warn!(%err, "Shop enumeration failed, selector will be empty");
                Vec::new()
            });

            let mut candidates = self.candidates.write().await;
            candidates.warehouses = warehouses;
            candidates.shops = shops;
            return;
        }

        if let Some(warehouse_id) = &self.user.warehouse_id {
            match self.api.get_warehouse(warehouse_id).await {
                Ok(warehouse) => {
                    self.state.write().await.active_entity =
                        Some(ActiveEntity::from_warehouse(&warehouse));
                    self.candidates.write().await.warehouses = vec![warehouse];
                }
                Err(err) => {
                    tracing::warn!(%err, %warehouse_id, "Assigned warehouse lookup failed");
                }
            }
        } else if let Some(shop_id) = &self.user.shop_id {
            match self.api.get_shop(shop_id).await {
                Ok(shop) => {
                    self.state.write().await.active_entity = Some(ActiveEntity::from_shop(&shop));
                    self.candidates.write().await.shops = vec![shop];
                }
                Err(err) => {
                    tracing::warn!(%err, %shop_id, "Assigned shop lookup failed");
                }
            }
        }
    }

    /// Current scope state
    pub async fn state(&self) -> ScopeState {
        self.state.read().await.clone()
    }

    /// Current selector candidates
    pub async fn candidates(&self) -> ScopeCandidates {
        self.candidates.read().await.clone()
    }

    /// The user this scope was resolved for
    pub fn user(&self) -> &UserInfo {
        &self.user
    }

    /// Switch the operating context
    ///
    /// Permitted only for the super admin; for every other role this is a
    /// logged no-op, not an error.
    pub async fn switch_context(&self, kind: ScopeKind, entity: Option<ActiveEntity>) {
        if !self.user.is_super_admin() {
            tracing::info!(
                user = %self.user.username,
                role = %self.user.role,
                requested = kind.as_str(),
                "Ignoring context switch from non-admin role"
            );
            return;
        }

        let mut state = self.state.write().await;
        tracing::debug!(
            from = state.kind.as_str(),
            to = kind.as_str(),
            entity = entity.as_ref().map(|e| e.id.as_str()),
            "Switching operational scope"
        );
        state.kind = kind;
        state.active_entity = entity;
    }
}
