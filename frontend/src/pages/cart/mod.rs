use leptos::*;

pub mod repository;
pub mod utils;

mod panel;

pub use panel::CartPanel;

#[component]
pub fn CartPage() -> impl IntoView {
    view! { <CartPanel /> }
}
