//! HTTP client for the orders service and its nested items resource.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::{
    domain::{Item, Order},
    error::ApiError,
    protocol::{HealthStatus, ItemPayload, OrderPayload, SearchFilter},
};
use tracing::{info, warn};
use url::Url;

pub mod error;

pub use error::ClientError;

pub type Result<T, E = ClientError> = std::result::Result<T, E>;

/// Every call the form controller makes against the orders service.
///
/// Identifiers are taken as the raw text a form field holds, so an empty or
/// malformed id reaches the service and fails there, not here.
#[async_trait]
pub trait OrdersApi: Send + Sync {
    async fn create_order(&self, payload: &OrderPayload) -> Result<Order>;
    async fn update_order(&self, id: &str, payload: &OrderPayload) -> Result<Order>;
    async fn get_order(&self, id: &str) -> Result<Order>;
    async fn delete_order(&self, id: &str) -> Result<()>;
    async fn cancel_order(&self, id: &str) -> Result<Order>;
    async fn list_orders(&self, filter: Option<&SearchFilter>) -> Result<Vec<Order>>;

    async fn create_item(&self, order_id: &str, payload: &ItemPayload) -> Result<Item>;
    async fn update_item(
        &self,
        order_id: &str,
        product_id: &str,
        payload: &ItemPayload,
    ) -> Result<Item>;
    async fn get_item(&self, order_id: &str, product_id: &str) -> Result<Item>;
    async fn delete_item(&self, order_id: &str, product_id: &str) -> Result<()>;
    async fn list_items(
        &self,
        order_id: &str,
        filter: Option<&SearchFilter>,
    ) -> Result<Vec<Item>>;

    async fn health(&self) -> Result<HealthStatus>;
}

pub struct OrdersClient {
    http: Client,
    base_url: Url,
    api_prefix: Vec<String>,
}

impl OrdersClient {
    pub fn new(server_url: &str) -> Result<Self> {
        let base_url = Url::parse(server_url).map_err(|err| ClientError::InvalidUrl {
            url: server_url.to_string(),
            reason: err.to_string(),
        })?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl {
                url: server_url.to_string(),
                reason: "expected an http or https base url".to_string(),
            });
        }
        Ok(Self {
            http: Client::new(),
            base_url,
            api_prefix: Vec::new(),
        })
    }

    /// Mounts the resource routes under `prefix` (e.g. `/api`). The health
    /// probe stays on the bare base url.
    pub fn with_api_prefix(mut self, prefix: &str) -> Self {
        self.api_prefix = prefix
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, prefixed: bool, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| ClientError::InvalidUrl {
                    url: self.base_url.to_string(),
                    reason: "base url cannot carry a path".to_string(),
                })?;
            path.pop_if_empty();
            if prefixed {
                path.extend(&self.api_prefix);
            }
            path.extend(segments);
        }
        Ok(url)
    }

    fn orders_url(&self, segments: &[&str]) -> Result<Url> {
        let mut full = Vec::with_capacity(segments.len() + 1);
        full.push("orders");
        full.extend_from_slice(segments);
        self.url(true, &full)
    }

    fn with_filter(mut url: Url, filter: Option<&SearchFilter>) -> Url {
        if let Some(filter) = filter {
            url.set_query(Some(&filter.query_string()));
        }
        url
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let request = request.build()?;
        let method = request.method().clone();
        let path = request.url().path().to_string();

        let res = self.http.execute(request).await?;
        let status = res.status();
        if status.is_success() {
            info!(%method, %path, status = status.as_u16(), "orders request succeeded");
            return Ok(res);
        }

        let (message, error) = match res.json::<ApiError>().await {
            Ok(body) => (body.message, body.error),
            Err(_) => (
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string(),
                None,
            ),
        };
        warn!(
            %method,
            %path,
            status = status.as_u16(),
            error = error.as_deref().unwrap_or_default(),
            %message,
            "orders request failed"
        );
        Err(ClientError::Api { status, message })
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        self.execute(request)
            .await?
            .json()
            .await
            .map_err(ClientError::Decode)
    }
}

#[async_trait]
impl OrdersApi for OrdersClient {
    async fn create_order(&self, payload: &OrderPayload) -> Result<Order> {
        let url = self.orders_url(&[])?;
        self.fetch(self.http.post(url).json(payload)).await
    }

    async fn update_order(&self, id: &str, payload: &OrderPayload) -> Result<Order> {
        let url = self.orders_url(&[id])?;
        self.fetch(self.http.put(url).json(payload)).await
    }

    async fn get_order(&self, id: &str) -> Result<Order> {
        let url = self.orders_url(&[id])?;
        self.fetch(self.http.get(url)).await
    }

    async fn delete_order(&self, id: &str) -> Result<()> {
        let url = self.orders_url(&[id])?;
        self.execute(self.http.delete(url)).await?;
        Ok(())
    }

    async fn cancel_order(&self, id: &str) -> Result<Order> {
        let url = self.orders_url(&[id, "cancel"])?;
        self.fetch(self.http.put(url)).await
    }

    async fn list_orders(&self, filter: Option<&SearchFilter>) -> Result<Vec<Order>> {
        let url = Self::with_filter(self.orders_url(&[])?, filter);
        self.fetch(self.http.get(url)).await
    }

    async fn create_item(&self, order_id: &str, payload: &ItemPayload) -> Result<Item> {
        let url = self.orders_url(&[order_id, "items"])?;
        self.fetch(self.http.post(url).json(payload)).await
    }

    async fn update_item(
        &self,
        order_id: &str,
        product_id: &str,
        payload: &ItemPayload,
    ) -> Result<Item> {
        let url = self.orders_url(&[order_id, "items", product_id])?;
        self.fetch(self.http.put(url).json(payload)).await
    }

    async fn get_item(&self, order_id: &str, product_id: &str) -> Result<Item> {
        let url = self.orders_url(&[order_id, "items", product_id])?;
        self.fetch(self.http.get(url)).await
    }

    async fn delete_item(&self, order_id: &str, product_id: &str) -> Result<()> {
        let url = self.orders_url(&[order_id, "items", product_id])?;
        self.execute(self.http.delete(url)).await?;
        Ok(())
    }

    async fn list_items(
        &self,
        order_id: &str,
        filter: Option<&SearchFilter>,
    ) -> Result<Vec<Item>> {
        let url = Self::with_filter(self.orders_url(&[order_id, "items"])?, filter);
        self.fetch(self.http.get(url)).await
    }

    async fn health(&self) -> Result<HealthStatus> {
        let url = self.url(false, &["health"])?;
        self.fetch(self.http.get(url)).await
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
