//! Dashboard aggregation
//!
//! Issues the independent dashboard endpoints concurrently and captures
//! each result on its own, so one failing endpoint leaves the other
//! sections populated. Completions from a superseded load (e.g. after a
//! scope switch) are discarded via the request-generation guard.

use std::sync::Arc;

use pharma_client::PlatformApi;
use shared::models::{DashboardSummary, SalesSummary, StockAlert};
use shared::PaginatedResponse;
use tokio::sync::RwLock;

use crate::fetch::FetchGuard;
use crate::scope::ScopeState;

/// Page size for the stock-alert panel
const ALERTS_PER_PAGE: u32 = 20;

/// Aggregated dashboard state for rendering
///
/// `None` sections were not loaded (or failed); the matching entry in
/// `errors` carries the message behind a failed section for the manual
/// retry affordance.
#[derive(Debug, Clone, Default)]
pub struct DashboardView {
    /// Generation this view was produced under
    pub generation: u64,
    pub summary: Option<DashboardSummary>,
    pub sales: Option<SalesSummary>,
    pub alerts: Option<PaginatedResponse<StockAlert>>,
    /// Section-local failure messages, in (section, message) form
    pub errors: Vec<(&'static str, String)>,
}

/// Dashboard KPI aggregation service
pub struct DashboardService {
    api: Arc<dyn PlatformApi>,
    guard: FetchGuard,
    view: RwLock<DashboardView>,
}

impl DashboardService {
    pub fn new(api: Arc<dyn PlatformApi>) -> Self {
        Self {
            api,
            guard: FetchGuard::new(),
            view: RwLock::new(DashboardView::default()),
        }
    }

    /// Load all dashboard sections for a scope
    ///
    /// Returns the fresh view, or `None` when this load was superseded by a
    /// newer one before it committed (its results are discarded).
    pub async fn load(&self, scope: &ScopeState) -> Option<DashboardView> {
        let generation = self.guard.begin();
        let query = scope.to_query();

        let (summary, sales, alerts) = tokio::join!(
            self.api.dashboard_summary(&query),
            self.api.sales_summary(&query),
            self.api.stock_alerts(&query, 1, ALERTS_PER_PAGE),
        );

        let mut view = DashboardView {
            generation,
            ..Default::default()
        };

        match summary {
            Ok(data) => view.summary = Some(data),
            Err(err) => view.errors.push(("summary", err.to_string())),
        }
        match sales {
            Ok(data) => view.sales = Some(data),
            Err(err) => view.errors.push(("sales", err.to_string())),
        }
        match alerts {
            Ok(data) => view.alerts = Some(data),
            Err(err) => view.errors.push(("alerts", err.to_string())),
        }

        for (section, message) in &view.errors {
            tracing::warn!(section, %message, "Dashboard section failed to load");
        }

        self.store_if_current(generation, view).await
    }

    /// Commit a completed view unless a newer load has begun
    ///
    /// The staleness check must happen under the write lock: checking
    /// before acquiring it leaves a window where a newer load commits
    /// between the check and the write, and the stale view would then
    /// overwrite the fresh one.
    async fn store_if_current(
        &self,
        generation: u64,
        view: DashboardView,
    ) -> Option<DashboardView> {
        let mut current = self.view.write().await;
        if !self.guard.is_current(generation) {
            tracing::debug!(generation, "Discarding superseded dashboard load");
            return None;
        }
        *current = view.clone();
        Some(view)
    }

    /// Last stored view
    pub async fn view(&self) -> DashboardView {
        self.view.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pharma_client::{ClientError, ClientResult};
    use shared::client::{LoginResponse, RefreshResponse};
    use shared::models::{MasterBundle, MedicalShop, Role, ScopeQuery, UserInfo, Warehouse};

    struct OfflineApi;

    #[async_trait]
    impl pharma_client::PlatformApi for OfflineApi {
        fn set_token(&self, _token: Option<String>) {}

        async fn login(&self, _u: &str, _p: &str) -> ClientResult<LoginResponse> {
            Err(ClientError::Internal("offline".to_string()))
        }
        async fn me(&self) -> ClientResult<UserInfo> {
            Err(ClientError::Internal("offline".to_string()))
        }
        async fn refresh_session(&self, _t: &str) -> ClientResult<RefreshResponse> {
            Err(ClientError::Internal("offline".to_string()))
        }
        async fn logout(&self) -> ClientResult<()> {
            Ok(())
        }
        async fn list_warehouses(&self) -> ClientResult<Vec<Warehouse>> {
            Ok(Vec::new())
        }
        async fn get_warehouse(&self, id: &str) -> ClientResult<Warehouse> {
            Err(ClientError::NotFound(id.to_string()))
        }
        async fn list_shops(&self) -> ClientResult<Vec<MedicalShop>> {
            Ok(Vec::new())
        }
        async fn get_shop(&self, id: &str) -> ClientResult<MedicalShop> {
            Err(ClientError::NotFound(id.to_string()))
        }
        async fn list_roles(&self) -> ClientResult<Vec<Role>> {
            Ok(Vec::new())
        }
        async fn master_bundle(&self) -> ClientResult<MasterBundle> {
            Err(ClientError::Internal("offline".to_string()))
        }
        async fn dashboard_summary(&self, _s: &ScopeQuery) -> ClientResult<DashboardSummary> {
            Err(ClientError::Internal("offline".to_string()))
        }
        async fn sales_summary(&self, _s: &ScopeQuery) -> ClientResult<SalesSummary> {
            Err(ClientError::Internal("offline".to_string()))
        }
        async fn stock_alerts(
            &self,
            _s: &ScopeQuery,
            _page: u32,
            _per_page: u32,
        ) -> ClientResult<PaginatedResponse<StockAlert>> {
            Err(ClientError::Internal("offline".to_string()))
        }
    }

    #[tokio::test]
    async fn test_commit_rejected_when_superseded_before_write() {
        let service = DashboardService::new(Arc::new(OfflineApi));

        let first = service.guard.begin();
        // A second load begins while the first is about to commit
        let second = service.guard.begin();

        let stale = DashboardView {
            generation: first,
            ..Default::default()
        };
        assert!(service.store_if_current(first, stale).await.is_none());
        assert_eq!(service.view().await.generation, 0);

        let fresh = DashboardView {
            generation: second,
            ..Default::default()
        };
        assert!(service.store_if_current(second, fresh).await.is_some());
        assert_eq!(service.view().await.generation, second);
    }

    #[tokio::test]
    async fn test_stale_commit_cannot_overwrite_fresh_view() {
        let service = DashboardService::new(Arc::new(OfflineApi));

        let first = service.guard.begin();
        let second = service.guard.begin();

        let fresh = DashboardView {
            generation: second,
            ..Default::default()
        };
        service.store_if_current(second, fresh).await.unwrap();

        // The first load finishes late and must not clobber the view
        let stale = DashboardView {
            generation: first,
            ..Default::default()
        };
        assert!(service.store_if_current(first, stale).await.is_none());
        assert_eq!(service.view().await.generation, second);
    }
}
