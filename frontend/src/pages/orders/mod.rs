use leptos::*;

pub mod utils;

mod detail;
mod list;

pub use detail::OrderDetailPanel;
pub use list::OrderListPanel;

#[component]
pub fn OrdersPage() -> impl IntoView {
    view! { <OrderListPanel /> }
}

#[component]
pub fn OrderDetailPage() -> impl IntoView {
    view! { <OrderDetailPanel /> }
}
