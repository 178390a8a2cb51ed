//! Pharma Admin - client-side core for the pharmacy platform admin UI
//!
//! Holds the session/permission/entity-scoping resolution layer the UI
//! renders against: session store, permission resolver, operational scope
//! manager, navigation visibility filter, master-data cache and the
//! dashboard aggregation service.
//!
//! All services are constructed explicitly and consume the REST boundary
//! through the [`pharma_client::PlatformApi`] trait so tests can substitute
//! fakes. Nothing in this layer is a security boundary; visibility gating
//! is a UX convenience and the backend stays authoritative.

pub mod dashboard;
pub mod error;
pub mod events;
pub mod fetch;
pub mod master_data;
pub mod nav;
pub mod resolver;
pub mod scope;
pub mod session;

pub use dashboard::{DashboardService, DashboardView};
pub use error::{AdminError, AdminResult};
pub use events::{SessionEvent, SessionEvents};
pub use fetch::FetchGuard;
pub use master_data::MasterDataCache;
pub use nav::{default_navigation, filter_navigation, NavGate, NavItem, NavSection};
pub use resolver::PermissionResolver;
pub use scope::{ActiveEntity, ScopeKind, ScopeManager, ScopeState};
pub use session::SessionStore;
