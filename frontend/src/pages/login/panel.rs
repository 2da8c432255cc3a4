use leptos::*;
use rust_i18n::t;

use super::utils;
use crate::api::LoginRequest;
use crate::components::common::{Button, ButtonVariant};
use crate::components::layout::{ErrorMessage, Layout};
use crate::state::auth;
use crate::utils::browser;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let login_action = auth::use_login_action();
    let pending = login_action.pending();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(_) => {
                    set_error.set(None);
                    browser::redirect_to("/");
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if let Err(message) = utils::validate_credentials(&email_value, &password_value) {
            set_error.set(Some(message));
            return;
        }
        set_error.set(None);
        login_action.dispatch(LoginRequest {
            email: email_value.trim().to_string(),
            password: password_value,
        });
    };

    view! {
        <Layout>
            <div class="max-w-md mx-auto mt-8 rounded-lg border border-border bg-surface-elevated p-8 space-y-6">
                <h1 class="text-2xl font-bold text-fg text-center">
                    {t!("login.title").to_string()}
                </h1>
                {move || error.get().map(|message| view! { <ErrorMessage message=message/> })}
                <form class="space-y-4" on:submit=on_submit>
                    <div>
                        <label class="block text-sm font-medium text-fg-muted mb-1" for="email">
                            {t!("login.email").to_string()}
                        </label>
                        <input
                            id="email"
                            type="email"
                            class="w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-fg-muted mb-1" for="password">
                            {t!("login.password").to_string()}
                        </label>
                        <input
                            id="password"
                            type="password"
                            class="w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>
                    <Button
                        variant=ButtonVariant::Primary
                        loading=pending
                        class="w-full"
                        attr:type="submit"
                    >
                        {t!("login.submit").to_string()}
                    </Button>
                </form>
                <div class="text-sm text-center space-y-1">
                    <p>
                        <a href="/password-reset/request" class="text-fg-muted hover:text-fg underline">
                            {t!("login.forgot_password").to_string()}
                        </a>
                    </p>
                    <p class="text-fg-muted">
                        {t!("login.no_account").to_string()}
                        {" "}
                        <a href="/signup" class="underline hover:text-fg">
                            {t!("nav.signup").to_string()}
                        </a>
                    </p>
                </div>
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::Session;
    use crate::test_support::ssr::render_with_session;

    #[test]
    fn login_form_renders_both_fields_and_links() {
        let html = render_with_session(Session::anonymous(), || view! { <LoginPanel/> });
        assert!(html.contains("id=\"email\""));
        assert!(html.contains("id=\"password\""));
        assert!(html.contains("href=\"/password-reset/request\""));
        assert!(html.contains("href=\"/signup\""));
    }
}
