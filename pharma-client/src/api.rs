//! Platform API seam
//!
//! The admin-core services consume the REST boundary through this trait so
//! tests can substitute in-memory fakes (constructor injection instead of a
//! global client singleton).

use async_trait::async_trait;
use shared::client::{LoginResponse, RefreshResponse};
use shared::models::{
    DashboardSummary, MasterBundle, MedicalShop, Role, SalesSummary, ScopeQuery, StockAlert,
    UserInfo, Warehouse,
};
use shared::PaginatedResponse;

use crate::{ClientResult, HttpClient};

/// Remote platform API consumed by the admin core
#[async_trait]
pub trait PlatformApi: Send + Sync {
    /// Install (or clear) the bearer token used for subsequent calls
    fn set_token(&self, token: Option<String>);

    async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse>;
    async fn me(&self) -> ClientResult<UserInfo>;
    async fn refresh_session(&self, refresh_token: &str) -> ClientResult<RefreshResponse>;
    async fn logout(&self) -> ClientResult<()>;

    async fn list_warehouses(&self) -> ClientResult<Vec<Warehouse>>;
    async fn get_warehouse(&self, id: &str) -> ClientResult<Warehouse>;
    async fn list_shops(&self) -> ClientResult<Vec<MedicalShop>>;
    async fn get_shop(&self, id: &str) -> ClientResult<MedicalShop>;
    async fn list_roles(&self) -> ClientResult<Vec<Role>>;

    async fn master_bundle(&self) -> ClientResult<MasterBundle>;
    async fn dashboard_summary(&self, scope: &ScopeQuery) -> ClientResult<DashboardSummary>;
    async fn sales_summary(&self, scope: &ScopeQuery) -> ClientResult<SalesSummary>;
    async fn stock_alerts(
        &self,
        scope: &ScopeQuery,
        page: u32,
        per_page: u32,
    ) -> ClientResult<PaginatedResponse<StockAlert>>;
}

#[async_trait]
impl PlatformApi for HttpClient {
    fn set_token(&self, token: Option<String>) {
        HttpClient::set_token(self, token)
    }

    async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        HttpClient::login(self, username, password).await
    }

    async fn me(&self) -> ClientResult<UserInfo> {
        HttpClient::me(self).await
    }

    async fn refresh_session(&self, refresh_token: &str) -> ClientResult<RefreshResponse> {
        HttpClient::refresh_token(self, refresh_token).await
    }

    async fn logout(&self) -> ClientResult<()> {
        HttpClient::logout(self).await
    }

    async fn list_warehouses(&self) -> ClientResult<Vec<Warehouse>> {
        HttpClient::list_warehouses(self).await
    }

    async fn get_warehouse(&self, id: &str) -> ClientResult<Warehouse> {
        HttpClient::get_warehouse(self, id).await
    }

    async fn list_shops(&self) -> ClientResult<Vec<MedicalShop>> {
        HttpClient::list_shops(self).await
    }

    async fn get_shop(&self, id: &str) -> ClientResult<MedicalShop> {
        HttpClient::get_shop(self, id).await
    }

    async fn list_roles(&self) -> ClientResult<Vec<Role>> {
        HttpClient::list_roles(self).await
    }

    async fn master_bundle(&self) -> ClientResult<MasterBundle> {
        HttpClient::master_bundle(self).await
    }

    async fn dashboard_summary(&self, scope: &ScopeQuery) -> ClientResult<DashboardSummary> {
        HttpClient::dashboard_summary(self, scope).await
    }

    async fn sales_summary(&self, scope: &ScopeQuery) -> ClientResult<SalesSummary> {
        HttpClient::sales_summary(self, scope).await
    }

    async fn stock_alerts(
        &self,
        scope: &ScopeQuery,
        page: u32,
        per_page: u32,
    ) -> ClientResult<PaginatedResponse<StockAlert>> {
        HttpClient::stock_alerts(self, scope, page, per_page).await
    }
}
