use leptos::*;

pub mod utils;

mod panel;

pub use panel::SignUpPanel;

#[component]
pub fn SignUpPage() -> impl IntoView {
    view! { <SignUpPanel /> }
}
