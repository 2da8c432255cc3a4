use futures::future::{Abortable, Aborted};
use leptos::use_context;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, AUTHORIZATION};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::cancel::CancelToken;
use super::credentials;
use super::error::ApiError;
use crate::config;

/// HTTP wrapper every endpoint group goes through. Injects the two
/// cross-cutting headers on each request: `Accept-Language` from the
/// current locale and `Authorization` from the persisted credential,
/// which is re-read from storage at request time so the header always
/// reflects the latest login/logout, not a stale in-memory snapshot.
///
/// A 401 surfaces as `ApiError::Unauthorized`; session state is left to
/// the issuing view.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    cancel: Option<CancelToken>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            cancel: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            cancel: None,
        }
    }

    /// Handle bound to a cancellation token. Views create one token per
    /// mount and cancel it on cleanup; every request made through the
    /// returned handle aborts with the token.
    pub fn with_cancel(&self, token: CancelToken) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            cancel: Some(token),
        }
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.trim_end_matches('/').to_string()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn request_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let locale = rust_i18n::locale();
        if let Ok(value) = HeaderValue::from_str(&locale) {
            headers.insert(ACCEPT_LANGUAGE, value);
        }
        if let Some(credential) = credentials::load() {
            if let Ok(value) = HeaderValue::from_str(&credential.header_value()) {
                headers.insert(AUTHORIZATION, value);
            }
        }
        headers
    }

    fn is_request_cancelled(&self) -> bool {
        self.cancel.as_ref().map_or(false, CancelToken::is_cancelled)
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let send = request.headers(self.request_headers()).send();
        let result = match &self.cancel {
            Some(token) => match Abortable::new(send, token.register()).await {
                Ok(inner) => inner,
                Err(Aborted) => return Err(ApiError::Cancelled),
            },
            None => send.await,
        };
        result.map_err(ApiError::network)
    }

    async fn parse_json<T: DeserializeOwned>(&self, response: Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await.map_err(ApiError::network)?;
        if self.is_request_cancelled() {
            return Err(ApiError::Cancelled);
        }
        if status.is_success() {
            serde_json::from_str(&body).map_err(ApiError::decode)
        } else {
            Err(ApiError::from_status(status.as_u16(), &body))
        }
    }

    async fn expect_success(&self, response: Response) -> Result<(), ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status.as_u16(), &body))
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self
            .client
            .get(format!("{}{}", base_url, path))
            .query(query);
        let response = self.execute(request).await?;
        self.parse_json(response).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self
            .client
            .post(format!("{}{}", base_url, path))
            .json(body);
        let response = self.execute(request).await?;
        self.parse_json(response).await
    }

    pub(crate) async fn put_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self.client.put(format!("{}{}", base_url, path)).json(body);
        let response = self.execute(request).await?;
        self.parse_json(response).await
    }

    pub(crate) async fn patch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self
            .client
            .patch(format!("{}{}", base_url, path))
            .json(body);
        let response = self.execute(request).await?;
        self.parse_json(response).await
    }

    pub(crate) async fn post_unit(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self
            .client
            .post(format!("{}{}", base_url, path))
            .json(body);
        let response = self.execute(request).await?;
        self.expect_success(response).await
    }

    pub(crate) async fn put_unit(&self, path: &str, body: &impl Serialize) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self.client.put(format!("{}{}", base_url, path)).json(body);
        let response = self.execute(request).await?;
        self.expect_success(response).await
    }

    pub(crate) async fn delete_unit(&self, path: &str) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self.client.delete(format!("{}{}", base_url, path));
        let response = self.execute(request).await?;
        self.expect_success(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Client from the application context, or a fresh default outside of it
/// (isolated component tests).
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_default()
}
