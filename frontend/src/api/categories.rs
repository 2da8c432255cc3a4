use super::client::ApiClient;
use super::error::ApiError;
use super::types::{CategoryListing, CategoryPayload, CategoryResponse};

impl ApiClient {
    /// The navigation dropdown and the admin tab both want the whole
    /// list; callers pass a size large enough to get it in one page.
    pub async fn list_categories(
        &self,
        page: u32,
        size: u32,
    ) -> Result<Vec<CategoryResponse>, ApiError> {
        let listing: CategoryListing = self
            .get_json(
                "/api/v1/categories",
                &[("page", page.to_string()), ("size", size.to_string())],
            )
            .await?;
        Ok(listing.into_items())
    }

    pub async fn get_category(&self, id: i64) -> Result<CategoryResponse, ApiError> {
        self.get_json(&format!("/api/v1/categories/{}", id), &[])
            .await
    }

    pub async fn create_category(&self, payload: &CategoryPayload) -> Result<(), ApiError> {
        self.post_unit("/api/v1/categories", payload).await
    }

    pub async fn update_category(&self, id: i64, payload: &CategoryPayload) -> Result<(), ApiError> {
        self.put_unit(&format!("/api/v1/categories/{}", id), payload)
            .await
    }

    pub async fn delete_category(&self, id: i64) -> Result<(), ApiError> {
        self.delete_unit(&format!("/api/v1/categories/{}", id))
            .await
    }
}
