pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test_support;

rust_i18n::i18n!("locales", fallback = "en");

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    state::locale::restore();
    log::info!("starting storefront frontend");

    // Resolve the backend base URL in the background; requests issued
    // before it lands await the same future.
    leptos::spawn_local(async move {
        config::init().await;
        log::info!("runtime config initialized");
    });

    router::mount_app();
}
