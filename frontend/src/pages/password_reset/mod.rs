use leptos::*;

mod request;
mod set;

pub use request::PasswordResetRequestPanel;
pub use set::PasswordResetSetPanel;

#[component]
pub fn PasswordResetRequestPage() -> impl IntoView {
    view! { <PasswordResetRequestPanel /> }
}

#[component]
pub fn PasswordResetSetPage() -> impl IntoView {
    view! { <PasswordResetSetPanel /> }
}
