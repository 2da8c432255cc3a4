use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Shape of the optional same-origin `config.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

fn cache_base_url(value: &str) -> String {
    let value = value.trim_end_matches('/').to_string();
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

#[cfg(target_arch = "wasm32")]
fn get_from_window_config() -> Option<String> {
    // Optional global set by the hosting page:
    // window.__STOREFRONT_CONFIG = { apiBaseUrl: "..." }
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &"__STOREFRONT_CONFIG".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let val = js_sys::Reflect::get(&obj, &"apiBaseUrl".into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| js_sys::Reflect::get(&obj, &"api_base_url".into()).ok());
    val.and_then(|v| v.as_string())
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let response = reqwest::get("./config.json").await.ok()?;
    if !response.status().is_success() {
        return None;
    }
    response.json::<RuntimeConfig>().await.ok()
}

/// Resolves the backend base URL once per tab: the window global wins,
/// then `config.json`, then the development default.
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(global) = get_from_window_config() {
            return cache_base_url(&global);
        }
        if let Some(config) = fetch_runtime_config().await {
            if let Some(url) = config.api_base_url {
                return cache_base_url(&url);
            }
        }
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let _ = await_api_base_url().await;
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn host_builds_resolve_to_the_default() {
        assert_eq!(await_api_base_url().await, DEFAULT_API_BASE_URL);
    }

    #[tokio::test]
    async fn resolution_is_memoized() {
        let first = await_api_base_url().await;
        let second = await_api_base_url().await;
        assert_eq!(first, second);
    }

    #[test]
    fn config_json_shape_is_camel_case() {
        let config: RuntimeConfig =
            serde_json::from_str(r#"{ "apiBaseUrl": "https://shop.example.com/" }"#).unwrap();
        assert_eq!(
            config.api_base_url.as_deref(),
            Some("https://shop.example.com/")
        );
    }
}
