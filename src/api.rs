use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::catalog::{InventoryItem, InventoryUpsert, NewProduct, Product};
use crate::checkout::OrderRequest;
use crate::feedback::{Feedback, FeedbackRequest};
use crate::orders::{Order, OrderStatus};
use crate::session::{Credentials, SignupRequest, User};
use crate::wholesale::{StockRequest, WholesaleOrder};

#[derive(Debug)]
pub enum ApiError {
    /// Transport-level failure (connect, timeout, body decode).
    Http(reqwest::Error),
    /// The backend answered with a non-success status. `body` is surfaced
    /// verbatim to the user; there is no local retry.
    Status { status: u16, body: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http(err) => write!(f, "request failed: {}", err),
            ApiError::Status { status, body } => {
                write!(f, "backend returned {}: {}", status, body)
            }
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Http(err) => Some(err),
            ApiError::Status { .. } => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Http(err)
    }
}

/// Typed bindings over the backend's REST surface, one method per endpoint
/// the dashboards call.
///
/// Mutation endpoints that answer with a plain confirmation string return
/// that string; read endpoints return the deserialized models.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        ApiClient {
            http: reqwest::Client::new(),
            base_url,
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Bearer token attached to every request while set.
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    // --- auth ---

    pub async fn signup(&self, request: &SignupRequest) -> Result<String, ApiError> {
        self.post_text("/api/auth/signup", request).await
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<User, ApiError> {
        self.post_json("/api/auth/login", credentials).await
    }

    pub async fn send_otp(&self, email: &str) -> Result<String, ApiError> {
        self.post_text("/api/auth/send-otp", &serde_json::json!({ "email": email }))
            .await
    }

    pub async fn verify_otp(&self, email: &str, otp: &str) -> Result<User, ApiError> {
        self.post_json(
            "/api/auth/verify-otp",
            &serde_json::json!({ "email": email, "otp": otp }),
        )
        .await
    }

    // --- master catalog ---

    pub async fn all_products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_json("/products").await
    }

    pub async fn product(&self, id: i64) -> Result<Product, ApiError> {
        self.get_json(&format!("/products/{}", id)).await
    }

    pub async fn add_product(&self, product: &NewProduct) -> Result<Product, ApiError> {
        self.post_json("/products/add", product).await
    }

    // --- retailer inventory ---

    pub async fn add_to_inventory(&self, upsert: &InventoryUpsert) -> Result<String, ApiError> {
        self.post_text("/inventory/add", upsert).await
    }

    pub async fn update_inventory(
        &self,
        inventory_id: i64,
        upsert: &InventoryUpsert,
    ) -> Result<String, ApiError> {
        let response = self
            .request(reqwest::Method::PUT, &format!("/inventory/update/{}", inventory_id))
            .json(upsert)
            .send()
            .await?;
        Self::expect_success(response).await?.text().await.map_err(ApiError::from)
    }

    pub async fn retailer_inventory(
        &self,
        retailer_id: i64,
    ) -> Result<Vec<InventoryItem>, ApiError> {
        self.get_json(&format!("/inventory/retailer/{}", retailer_id))
            .await
    }

    // --- orders ---

    pub async fn create_order(&self, request: &OrderRequest) -> Result<String, ApiError> {
        self.post_text("/orders/create", request).await
    }

    pub async fn customer_orders(&self, customer_id: i64) -> Result<Vec<Order>, ApiError> {
        self.get_json(&format!("/orders/customer/{}", customer_id))
            .await
    }

    pub async fn retailer_orders(&self, retailer_id: i64) -> Result<Vec<Order>, ApiError> {
        self.get_json(&format!("/orders/retailer/{}", retailer_id))
            .await
    }

    pub async fn update_order_status(
        &self,
        order_id: i64,
        status: OrderStatus,
    ) -> Result<String, ApiError> {
        let response = self
            .request(reqwest::Method::PUT, &format!("/orders/update-status/{}", order_id))
            .query(&[("status", status.as_wire())])
            .send()
            .await?;
        Self::expect_success(response).await?.text().await.map_err(ApiError::from)
    }

    // --- feedback ---

    pub async fn add_feedback(&self, request: &FeedbackRequest) -> Result<String, ApiError> {
        self.post_text("/feedback/add", request).await
    }

    pub async fn product_feedback(&self, product_id: i64) -> Result<Vec<Feedback>, ApiError> {
        self.get_json(&format!("/feedback/product/{}", product_id))
            .await
    }

    // --- wholesale ---

    pub async fn request_stock(&self, request: &StockRequest) -> Result<String, ApiError> {
        self.post_text("/wholesale/request", request).await
    }

    pub async fn approve_stock_request(&self, order_id: i64) -> Result<String, ApiError> {
        let response = self
            .request(reqwest::Method::PUT, &format!("/wholesale/approve/{}", order_id))
            .send()
            .await?;
        Self::expect_success(response).await?.text().await.map_err(ApiError::from)
    }

    pub async fn pending_wholesale_orders(&self) -> Result<Vec<WholesaleOrder>, ApiError> {
        self.get_json("/wholesale/pending").await
    }

    pub async fn my_stock_requests(
        &self,
        retailer_id: i64,
    ) -> Result<Vec<WholesaleOrder>, ApiError> {
        self.get_json(&format!("/wholesale/retailer/{}", retailer_id))
            .await
    }

    // --- plumbing ---

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.request(reqwest::Method::GET, path).send().await?;
        Self::expect_success(response).await?.json().await.map_err(ApiError::from)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .request(reqwest::Method::POST, path)
            .json(body)
            .send()
            .await?;
        Self::expect_success(response).await?.json().await.map_err(ApiError::from)
    }

    async fn post_text<B: Serialize>(&self, path: &str, body: &B) -> Result<String, ApiError> {
        let response = self
            .request(reqwest::Method::POST, path)
            .json(body)
            .send()
            .await?;
        Self::expect_success(response).await?.text().await.map_err(ApiError::from)
    }

    async fn expect_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}
