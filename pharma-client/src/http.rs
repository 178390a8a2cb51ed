//! HTTP client for network-based API calls

use crate::{ApiResponse, ClientConfig, ClientError, ClientResult, LoginResponse, RefreshResponse};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::client::{LoginRequest, RefreshRequest};
use shared::models::{
    DashboardSummary, MasterBundle, MedicalShop, Role, SalesSummary, ScopeQuery, StockAlert,
    UserInfo, Warehouse,
};
use shared::{ErrorCode, PaginatedResponse};
use std::sync::{Arc, RwLock};

/// HTTP client for making network requests to the platform API
///
/// The bearer token is held behind a lock so a logged-in token can be
/// installed on a client that is already shared across services.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: Arc::new(RwLock::new(config.token.clone())),
        }
    }

    /// Set or clear the authentication token
    pub fn set_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.token.write() {
            *guard = token;
        }
    }

    /// Get the current token
    pub fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|t| t.clone())
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token().map(|t| format!("Bearer {}", t))
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.get(self.url(path));

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.post(self.url(path)).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request without body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.post(self.url(path));

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.put(self.url(path)).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.delete(self.url(path));

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return Err(Self::classify_error(status, &text));
        }

        response.json().await.map_err(Into::into)
    }

    /// Classify an error response into a `ClientError`
    ///
    /// The envelope's `code` field takes precedence over the HTTP status:
    /// the API signals e.g. a disabled account or an expired session with
    /// the same 4xx status, and the u16 code is the only way to tell them
    /// apart. Non-envelope bodies fall back to the status alone.
    fn classify_error(status: StatusCode, body: &str) -> ClientError {
        let envelope = serde_json::from_str::<ApiResponse<()>>(body).ok();
        let message = envelope
            .as_ref()
            .map(|r| r.message.clone())
            .unwrap_or_else(|| body.to_string());
        let code = envelope
            .and_then(|r| r.code)
            .and_then(|c| ErrorCode::try_from(c).ok());

        if let Some(code) = code {
            if code.is_auth_error() {
                return ClientError::Unauthorized;
            }
            if code.is_permission_error() {
                return ClientError::Forbidden(message);
            }
            return match code {
                ErrorCode::NotFound => ClientError::NotFound(message),
                ErrorCode::ValidationFailed
                | ErrorCode::InvalidRequest
                | ErrorCode::AlreadyExists => ClientError::Validation(message),
                _ => ClientError::Internal(message),
            };
        }

        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::FORBIDDEN => ClientError::Forbidden(message),
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            StatusCode::BAD_REQUEST => ClientError::Validation(message),
            _ => ClientError::Internal(message),
        }
    }

    /// Unwrap the data field of an envelope or fail with InvalidResponse
    fn expect_data<T>(response: ApiResponse<T>, what: &str) -> ClientResult<T> {
        response
            .data
            .ok_or_else(|| ClientError::InvalidResponse(format!("Missing {} data", what)))
    }

    // ========== Auth API ==========

    /// Login with username and password
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = self
            .post::<ApiResponse<LoginResponse>, _>("api/auth/login", &request)
            .await?;
        Self::expect_data(response, "login")
    }

    /// Get current user information
    pub async fn me(&self) -> ClientResult<UserInfo> {
        let response = self.get::<ApiResponse<UserInfo>>("api/auth/me").await?;
        Self::expect_data(response, "user")
    }

    /// Exchange a refresh token for a new token pair
    pub async fn refresh_token(&self, refresh_token: &str) -> ClientResult<RefreshResponse> {
        let request = RefreshRequest {
            refresh_token: refresh_token.to_string(),
        };

        let response = self
            .post::<ApiResponse<RefreshResponse>, _>("api/auth/refresh", &request)
            .await?;
        Self::expect_data(response, "refresh")
    }

    /// Logout and drop the local token
    pub async fn logout(&self) -> ClientResult<()> {
        self.post_empty::<ApiResponse<()>>("api/auth/logout").await?;
        self.set_token(None);
        Ok(())
    }

    // ========== Directory API ==========

    /// List all warehouses
    pub async fn list_warehouses(&self) -> ClientResult<Vec<Warehouse>> {
        let response = self
            .get::<ApiResponse<Vec<Warehouse>>>("api/warehouses")
            .await?;
        Self::expect_data(response, "warehouses")
    }

    /// Get a warehouse by id
    pub async fn get_warehouse(&self, id: &str) -> ClientResult<Warehouse> {
        let response = self
            .get::<ApiResponse<Warehouse>>(&format!("api/warehouses/{}", id))
            .await?;
        Self::expect_data(response, "warehouse")
    }

    /// List all medical shops
    pub async fn list_shops(&self) -> ClientResult<Vec<MedicalShop>> {
        let response = self
            .get::<ApiResponse<Vec<MedicalShop>>>("api/shops")
            .await?;
        Self::expect_data(response, "shops")
    }

    /// Get a medical shop by id
    pub async fn get_shop(&self, id: &str) -> ClientResult<MedicalShop> {
        let response = self
            .get::<ApiResponse<MedicalShop>>(&format!("api/shops/{}", id))
            .await?;
        Self::expect_data(response, "shop")
    }

    /// List all roles
    pub async fn list_roles(&self) -> ClientResult<Vec<Role>> {
        let response = self.get::<ApiResponse<Vec<Role>>>("api/roles").await?;
        Self::expect_data(response, "roles")
    }

    // ========== Aggregate API ==========

    /// Fetch the unified master-data bundle
    pub async fn master_bundle(&self) -> ClientResult<MasterBundle> {
        let response = self
            .get::<ApiResponse<MasterBundle>>("api/masters/bundle")
            .await?;
        Self::expect_data(response, "master bundle")
    }

    /// Fetch dashboard headline counters for a scope
    pub async fn dashboard_summary(&self, scope: &ScopeQuery) -> ClientResult<DashboardSummary> {
        let path = format!("api/dashboard/summary?{}", scope.to_query_string());
        let response = self.get::<ApiResponse<DashboardSummary>>(&path).await?;
        Self::expect_data(response, "dashboard summary")
    }

    /// Fetch sales aggregates for a scope
    pub async fn sales_summary(&self, scope: &ScopeQuery) -> ClientResult<SalesSummary> {
        let path = format!("api/dashboard/sales?{}", scope.to_query_string());
        let response = self.get::<ApiResponse<SalesSummary>>(&path).await?;
        Self::expect_data(response, "sales summary")
    }

    /// Fetch one page of stock alerts for a scope
    pub async fn stock_alerts(
        &self,
        scope: &ScopeQuery,
        page: u32,
        per_page: u32,
    ) -> ClientResult<PaginatedResponse<StockAlert>> {
        let path = format!(
            "api/dashboard/alerts?{}&page={}&per_page={}",
            scope.to_query_string(),
            page,
            per_page
        );
        let response = self
            .get::<ApiResponse<PaginatedResponse<StockAlert>>>(&path)
            .await?;
        Self::expect_data(response, "stock alerts")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_error_prefers_envelope_code() {
        // Session expiry arrives as a 400 body with an auth code
        let body = r#"{"code":1005,"message":"Session has expired"}"#;
        let err = HttpClient::classify_error(StatusCode::BAD_REQUEST, body);
        assert!(matches!(err, ClientError::Unauthorized));

        let body = r#"{"code":2001,"message":"Permission denied"}"#;
        let err = HttpClient::classify_error(StatusCode::BAD_REQUEST, body);
        assert!(matches!(err, ClientError::Forbidden(m) if m == "Permission denied"));

        let body = r#"{"code":3,"message":"Warehouse not found"}"#;
        let err = HttpClient::classify_error(StatusCode::INTERNAL_SERVER_ERROR, body);
        assert!(matches!(err, ClientError::NotFound(m) if m == "Warehouse not found"));
    }

    #[test]
    fn test_classify_error_falls_back_to_status() {
        let err = HttpClient::classify_error(StatusCode::UNAUTHORIZED, "not json");
        assert!(matches!(err, ClientError::Unauthorized));

        let err = HttpClient::classify_error(StatusCode::BAD_GATEWAY, "upstream down");
        assert!(matches!(err, ClientError::Internal(m) if m == "upstream down"));
    }

    #[test]
    fn test_classify_error_unknown_code_uses_status() {
        let body = r#"{"code":4242,"message":"???"}"#;
        let err = HttpClient::classify_error(StatusCode::BAD_REQUEST, body);
        // An unrecognized code cannot be trusted; the status decides
        assert!(matches!(err, ClientError::Validation(_)));
    }
}
