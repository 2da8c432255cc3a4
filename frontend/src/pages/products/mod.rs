use leptos::*;

pub mod components;
pub mod repository;
pub mod utils;

mod detail;
mod list;

pub use detail::ProductDetailPanel;
pub use list::ProductListPanel;

#[component]
pub fn ProductsPage() -> impl IntoView {
    view! { <ProductListPanel /> }
}

#[component]
pub fn ProductDetailPage() -> impl IntoView {
    view! { <ProductDetailPanel /> }
}
