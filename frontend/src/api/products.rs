use super::client::ApiClient;
use super::error::ApiError;
use super::types::{Page, ProductPayload, ProductResponse};

/// Storefront product grids page in fives; the admin table uses
/// [`ADMIN_PAGE_SIZE`](super::admin::ADMIN_PAGE_SIZE).
pub const PRODUCT_PAGE_SIZE: u32 = 5;

impl ApiClient {
    pub async fn list_products(
        &self,
        page: u32,
        size: u32,
    ) -> Result<Page<ProductResponse>, ApiError> {
        self.get_json(
            "/api/v1/products",
            &[("page", page.to_string()), ("size", size.to_string())],
        )
        .await
    }

    pub async fn search_products(
        &self,
        keyword: &str,
        page: u32,
        size: u32,
    ) -> Result<Page<ProductResponse>, ApiError> {
        self.get_json(
            "/api/v1/products/search",
            &[
                ("keyword", keyword.to_string()),
                ("page", page.to_string()),
                ("size", size.to_string()),
            ],
        )
        .await
    }

    pub async fn products_by_category(
        &self,
        category_id: i64,
        page: u32,
        size: u32,
    ) -> Result<Page<ProductResponse>, ApiError> {
        self.get_json(
            &format!("/api/v1/products/category/{}", category_id),
            &[("page", page.to_string()), ("size", size.to_string())],
        )
        .await
    }

    pub async fn get_product(&self, id: i64) -> Result<ProductResponse, ApiError> {
        self.get_json(&format!("/api/v1/products/{}", id), &[]).await
    }

    pub async fn create_product(&self, payload: &ProductPayload) -> Result<(), ApiError> {
        self.post_unit("/api/v1/products", payload).await
    }

    pub async fn update_product(&self, id: i64, payload: &ProductPayload) -> Result<(), ApiError> {
        self.put_unit(&format!("/api/v1/products/{}", id), payload)
            .await
    }

    pub async fn delete_product(&self, id: i64) -> Result<(), ApiError> {
        self.delete_unit(&format!("/api/v1/products/{}", id)).await
    }
}
