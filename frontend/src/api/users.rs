use serde_json::json;

use super::client::ApiClient;
use super::error::ApiError;
use super::types::{Page, Role, UserResponse};

impl ApiClient {
    /// Admin-only listing; everyone else gets a 403 from the backend.
    pub async fn list_users(&self, page: u32, size: u32) -> Result<Page<UserResponse>, ApiError> {
        self.get_json(
            "/api/v1/users",
            &[("page", page.to_string()), ("size", size.to_string())],
        )
        .await
    }

    pub async fn get_user(&self, id: i64) -> Result<UserResponse, ApiError> {
        self.get_json(&format!("/api/v1/users/{}", id), &[]).await
    }

    pub async fn update_user_role(&self, id: i64, role: Role) -> Result<(), ApiError> {
        self.put_unit(&format!("/api/v1/users/{}", id), &json!({ "role": role }))
            .await
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        self.delete_unit(&format!("/api/v1/users/{}", id)).await
    }
}
