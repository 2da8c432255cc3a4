//! Browser navigation helpers. No-ops on native targets so view code
//! that redirects can still run under host tests.

pub fn redirect_to(path: &str) {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = path;
}

pub fn reload() {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}

pub fn current_path() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|w| w.location().pathname().ok())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}
