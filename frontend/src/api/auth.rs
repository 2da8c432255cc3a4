use serde_json::json;

use super::client::ApiClient;
use super::error::ApiError;
use super::types::{GenericResponse, LoginRequest, Session, SignUpRequest};

impl ApiClient {
    /// Exchanges credentials for a full session payload, token included.
    pub async fn login(&self, request: &LoginRequest) -> Result<Session, ApiError> {
        self.post_json("/api/v1/auth", request).await
    }

    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<GenericResponse, ApiError> {
        self.post_json("/api/v1/users", request).await
    }

    pub async fn activate(&self, token: &str) -> Result<GenericResponse, ApiError> {
        self.post_json(&format!("/api/v1/users/token/{}", token), &json!({}))
            .await
    }

    pub async fn request_password_reset(&self, email: &str) -> Result<GenericResponse, ApiError> {
        self.post_json("/api/v1/users/password-reset", &json!({ "email": email }))
            .await
    }

    pub async fn set_password(
        &self,
        token: &str,
        password: &str,
    ) -> Result<GenericResponse, ApiError> {
        self.patch_json(
            "/api/v1/users/password-reset",
            &json!({ "token": token, "password": password }),
        )
        .await
    }
}
