use serde_json::json;

use super::client::ApiClient;
use super::error::ApiError;
use super::types::{OrderResponse, OrderStatus, Page};

/// The customer-facing order history pages in fives.
pub const ORDER_PAGE_SIZE: u32 = 5;

impl ApiClient {
    pub async fn list_orders(
        &self,
        page: u32,
        size: u32,
    ) -> Result<Page<OrderResponse>, ApiError> {
        self.get_json(
            "/api/v1/orders",
            &[("page", page.to_string()), ("size", size.to_string())],
        )
        .await
    }

    pub async fn get_order(&self, id: i64) -> Result<OrderResponse, ApiError> {
        self.get_json(&format!("/api/v1/orders/{}", id), &[]).await
    }

    /// Turns the caller's cart into an order; the backend snapshots the
    /// cart lines server side, so the only input is the address.
    pub async fn create_order(&self, shipping_address: &str) -> Result<OrderResponse, ApiError> {
        self.post_json(
            "/api/v1/orders",
            &json!({ "shippingAddress": shipping_address }),
        )
        .await
    }

    pub async fn update_order_status(
        &self,
        id: i64,
        status: OrderStatus,
    ) -> Result<(), ApiError> {
        self.put_unit(
            &format!("/api/v1/orders/{}/status", id),
            &json!({ "status": status }),
        )
        .await
    }

    pub async fn delete_order(&self, id: i64) -> Result<(), ApiError> {
        self.delete_unit(&format!("/api/v1/orders/{}", id)).await
    }

    /// Cancelling is a status transition, not a delete; the record stays
    /// visible in the history with a CANCELLED badge.
    pub async fn cancel_order(&self, id: i64) -> Result<(), ApiError> {
        self.update_order_status(id, OrderStatus::Cancelled).await
    }
}
