//! Key-value persistence. Backed by localStorage in the browser and by a
//! thread-local map on native targets so the same call sites work under
//! host tests and server-side rendering.
//!
//! All accessors are infallible: platform errors degrade to `None` or a
//! silent no-op.

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(target_arch = "wasm32")]
pub fn get_item(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

#[cfg(target_arch = "wasm32")]
pub fn set_item(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

#[cfg(target_arch = "wasm32")]
pub fn remove_item(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn get_item(key: &str) -> Option<String> {
        STORE.with(|s| s.borrow().get(key).cloned())
    }

    pub fn set_item(key: &str, value: &str) {
        STORE.with(|s| {
            s.borrow_mut().insert(key.to_string(), value.to_string());
        });
    }

    pub fn remove_item(key: &str) {
        STORE.with(|s| {
            s.borrow_mut().remove(key);
        });
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::{get_item, remove_item, set_item};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_returns_value() {
        set_item("storage_test_key", "value-1");
        assert_eq!(get_item("storage_test_key"), Some("value-1".to_string()));
        remove_item("storage_test_key");
    }

    #[test]
    fn get_missing_key_returns_none() {
        assert_eq!(get_item("storage_test_never_set"), None);
    }

    #[test]
    fn set_overwrites_previous_value() {
        set_item("storage_test_overwrite", "old");
        set_item("storage_test_overwrite", "new");
        assert_eq!(get_item("storage_test_overwrite"), Some("new".to_string()));
        remove_item("storage_test_overwrite");
    }

    #[test]
    fn remove_is_idempotent() {
        set_item("storage_test_remove", "x");
        remove_item("storage_test_remove");
        remove_item("storage_test_remove");
        assert_eq!(get_item("storage_test_remove"), None);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn local_storage_roundtrip() {
        set_item("storage_wasm_test", "persisted");
        assert_eq!(get_item("storage_wasm_test"), Some("persisted".to_string()));
        remove_item("storage_wasm_test");
        assert_eq!(get_item("storage_wasm_test"), None);
    }
}
