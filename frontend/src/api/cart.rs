use serde_json::json;

use super::client::ApiClient;
use super::error::ApiError;
use super::types::CartResponse;

impl ApiClient {
    pub async fn get_cart(&self) -> Result<CartResponse, ApiError> {
        self.get_json("/api/v1/cart", &[]).await
    }

    pub async fn add_to_cart(&self, product_id: i64, quantity: i32) -> Result<(), ApiError> {
        self.post_unit(
            "/api/v1/cart/add",
            &json!({ "productId": product_id, "quantity": quantity }),
        )
        .await
    }

    pub async fn update_cart_item(&self, item_id: i64, quantity: i32) -> Result<(), ApiError> {
        self.put_unit(
            &format!("/api/v1/cart/items/{}", item_id),
            &json!({ "quantity": quantity }),
        )
        .await
    }

    pub async fn remove_cart_item(&self, item_id: i64) -> Result<(), ApiError> {
        self.delete_unit(&format!("/api/v1/cart/items/{}", item_id))
            .await
    }

    pub async fn clear_cart(&self) -> Result<(), ApiError> {
        self.delete_unit("/api/v1/cart").await
    }
}
