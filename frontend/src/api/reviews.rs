use super::client::ApiClient;
use super::error::ApiError;
use super::types::{Page, RatingSummary, ReviewPayload, ReviewResponse};

/// Reviews under a product detail page in fives.
pub const REVIEW_PAGE_SIZE: u32 = 5;

impl ApiClient {
    pub async fn list_reviews(
        &self,
        product_id: i64,
        page: u32,
        size: u32,
    ) -> Result<Page<ReviewResponse>, ApiError> {
        self.get_json(
            &format!("/api/v1/reviews/product/{}", product_id),
            &[("page", page.to_string()), ("size", size.to_string())],
        )
        .await
    }

    pub async fn product_rating(&self, product_id: i64) -> Result<RatingSummary, ApiError> {
        self.get_json(&format!("/api/v1/reviews/product/{}/rating", product_id), &[])
            .await
    }

    pub async fn get_review(&self, id: i64) -> Result<ReviewResponse, ApiError> {
        self.get_json(&format!("/api/v1/reviews/{}", id), &[]).await
    }

    pub async fn create_review(
        &self,
        product_id: i64,
        payload: &ReviewPayload,
    ) -> Result<(), ApiError> {
        self.post_unit(&format!("/api/v1/reviews/product/{}", product_id), payload)
            .await
    }

    pub async fn update_review(&self, id: i64, payload: &ReviewPayload) -> Result<(), ApiError> {
        self.put_unit(&format!("/api/v1/reviews/{}", id), payload)
            .await
    }

    pub async fn delete_review(&self, id: i64) -> Result<(), ApiError> {
        self.delete_unit(&format!("/api/v1/reviews/{}", id)).await
    }
}
