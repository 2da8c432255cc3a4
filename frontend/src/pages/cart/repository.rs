use crate::api::{ApiClient, ApiError, CartResponse, OrderResponse};

#[derive(Clone)]
pub struct CartRepository {
    api: ApiClient,
}

impl CartRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn load(&self) -> Result<CartResponse, ApiError> {
        self.api.get_cart().await
    }

    pub async fn set_quantity(&self, item_id: i64, quantity: i32) -> Result<(), ApiError> {
        self.api.update_cart_item(item_id, quantity.max(1)).await
    }

    pub async fn remove_item(&self, item_id: i64) -> Result<(), ApiError> {
        self.api.remove_cart_item(item_id).await
    }

    pub async fn clear(&self) -> Result<(), ApiError> {
        self.api.clear_cart().await
    }

    /// Checkout proper: the backend turns the cart into an order for
    /// the given address and empties the cart server-side.
    pub async fn checkout(&self, shipping_address: &str) -> Result<OrderResponse, ApiError> {
        self.api.create_order(shipping_address.trim()).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn set_quantity_floors_at_one() {
        let server = MockServer::start_async().await;
        let update = server.mock(|when, then| {
            when.method(PUT)
                .path("/api/v1/cart/items/41")
                .json_body(json!({ "quantity": 1 }));
            then.status(200);
        });

        let repo = CartRepository::new(ApiClient::new_with_base_url(server.base_url()));
        repo.set_quantity(41, 0).await.unwrap();
        update.assert_async().await;
    }

    #[tokio::test]
    async fn checkout_posts_the_trimmed_address() {
        let server = MockServer::start_async().await;
        let create = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v1/orders")
                .json_body(json!({ "shippingAddress": "1 Main St" }));
            then.status(200).json_body(json!({
                "id": 9,
                "status": "PENDING",
                "totalAmount": 25.0
            }));
        });

        let repo = CartRepository::new(ApiClient::new_with_base_url(server.base_url()));
        let order = repo.checkout("  1 Main St  ").await.unwrap();
        assert_eq!(order.id, 9);
        create.assert_async().await;
    }
}
