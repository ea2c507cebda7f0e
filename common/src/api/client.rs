//! Typed access to the backend routes.

use log::debug;
use serde::Serialize;
use serde_json::Value;

use super::endpoints;
use super::{ApiError, ApiRequest, ApiResponse, Method, Transport};
use crate::config::ApiConfig;
use crate::model::customer::Customer;
use crate::model::item::Item;
use crate::model::sample::SampleRecord;
use crate::requests::{CreateItemRequest, CreateSampleRequest};

/// Client for the backend API.
///
/// Reads decode the body whatever the status code is, the way the pages have
/// always consumed `fetch` responses. Mutations turn a non-success status
/// into [`ApiError::Status`] so callers can log or report it.
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    config: ApiConfig,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // ── Customers ───────────────────────────────────────────────────

    /// `GET /allcustomers`.
    ///
    /// A body that is valid JSON but not an array (an error object, `null`)
    /// is read as an empty list. Invalid JSON is a decode error.
    pub async fn list_customers(&self) -> Result<Vec<Customer>, ApiError> {
        let value: Value = self.get(endpoints::ALL_CUSTOMERS).await?.json()?;
        match value {
            Value::Array(_) => serde_json::from_value(value).map_err(ApiError::Decode),
            _ => Ok(Vec::new()),
        }
    }

    /// `GET /customers?customer_id={id}`.
    pub async fn get_customer(&self, customer_id: &str) -> Result<Customer, ApiError> {
        self.get(&endpoints::customer_by_id(customer_id))
            .await?
            .error_for_status()?
            .json()
    }

    /// `POST /customers`.
    pub async fn create_customer(&self, customer: &Customer) -> Result<(), ApiError> {
        self.send_json(Method::Post, endpoints::CUSTOMERS, customer)
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// `PUT /customers`, a full-record replacement keyed by `customer_id`.
    pub async fn update_customer(&self, customer: &Customer) -> Result<(), ApiError> {
        self.send_json(Method::Put, endpoints::CUSTOMERS, customer)
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// `DELETE /customers?customer_id={id}`.
    pub async fn delete_customer(&self, customer_id: &str) -> Result<(), ApiError> {
        self.send(Method::Delete, &endpoints::customer_by_id(customer_id), None)
            .await?
            .error_for_status()?;
        Ok(())
    }

    // ── Samples ─────────────────────────────────────────────────────

    /// `GET /sample`.
    pub async fn list_samples(&self) -> Result<Vec<SampleRecord>, ApiError> {
        self.get(endpoints::SAMPLE).await?.json()
    }

    /// `POST /sample` with `{"name": ...}`.
    pub async fn create_sample(&self, name: &str) -> Result<(), ApiError> {
        let payload = CreateSampleRequest {
            name: name.to_string(),
        };
        self.send_json(Method::Post, endpoints::SAMPLE, &payload)
            .await?
            .error_for_status()?;
        Ok(())
    }

    // ── Items ───────────────────────────────────────────────────────

    /// `GET /items`.
    pub async fn list_items(&self) -> Result<Vec<Item>, ApiError> {
        self.get(endpoints::ITEMS).await?.json()
    }

    /// `POST /items`.
    pub async fn create_item(&self, payload: &CreateItemRequest) -> Result<(), ApiError> {
        self.send_json(Method::Post, endpoints::ITEMS, payload)
            .await?
            .error_for_status()?;
        Ok(())
    }

    // ── Health ──────────────────────────────────────────────────────

    // The health calls return the raw response: the Status Viewer sends both
    // requests before decoding either body.

    /// `GET /health/db`. Decode with `json::<DbHealth>()`.
    pub async fn health_db(&self) -> Result<ApiResponse, ApiError> {
        self.get(endpoints::HEALTH_DB).await
    }

    /// `GET /health/info`. Decode with `json::<InfoSnapshot>()`.
    pub async fn health_info(&self) -> Result<ApiResponse, ApiError> {
        self.get(endpoints::HEALTH_INFO).await
    }

    // ── Plumbing ────────────────────────────────────────────────────

    async fn get(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.send(Method::Get, path, None).await
    }

    async fn send_json<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse, ApiError> {
        let body = serde_json::to_string(body).map_err(ApiError::Encode)?;
        self.send(method, path, Some(body)).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest {
            method,
            url: self.config.url(path),
            body,
        };
        debug!("{} {}", request.method, request.url);
        let response = self.transport.send(request).await?;
        debug!("{} {} -> {}", method, path, response.status);
        Ok(response)
    }
}
