use leptos::*;

pub mod repository;

mod panel;

pub use panel::PaymentPanel;

#[component]
pub fn PaymentPage() -> impl IntoView {
    view! { <PaymentPanel /> }
}
