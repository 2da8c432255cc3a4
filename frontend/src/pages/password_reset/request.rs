use leptos::*;
use rust_i18n::t;

use crate::api::{use_api, CancelToken};
use crate::components::common::{Button, ButtonVariant};
use crate::components::layout::{ErrorMessage, Layout, SuccessMessage};

#[component]
pub fn PasswordResetRequestPanel() -> impl IntoView {
    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        on_cleanup(move || cancel.cancel());
    }
    let api = use_api().with_cancel(cancel);

    let (email, set_email) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (success, set_success) = create_signal(None::<String>);

    let request_action = create_action(move |email: &String| {
        let api = api.clone();
        let email = email.clone();
        async move { api.request_password_reset(&email).await }
    });
    let pending = request_action.pending();

    create_effect(move |_| {
        if let Some(result) = request_action.value().get() {
            match result {
                Ok(response) => {
                    set_error.set(None);
                    set_success.set(Some(response.message));
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get_untracked().trim().to_string();
        if email_value.is_empty() || !email_value.contains('@') {
            set_error.set(Some(t!("login.invalid_email").to_string()));
            return;
        }
        request_action.dispatch(email_value);
    };

    view! {
        <Layout>
            <div class="max-w-md mx-auto mt-8 rounded-lg border border-border bg-surface-elevated p-8 space-y-6">
                <h1 class="text-2xl font-bold text-fg text-center">
                    {t!("password_reset.request_title").to_string()}
                </h1>
                <p class="text-sm text-fg-muted">
                    {t!("password_reset.request_hint").to_string()}
                </p>
                {move || error.get().map(|message| view! { <ErrorMessage message=message/> })}
                {move || success.get().map(|message| view! { <SuccessMessage message=message/> })}
                <form class="space-y-4" on:submit=on_submit>
                    <div>
                        <label class="block text-sm font-medium text-fg-muted mb-1" for="reset-email">
                            {t!("login.email").to_string()}
                        </label>
                        <input
                            id="reset-email"
                            type="email"
                            class="w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>
                    <Button
                        variant=ButtonVariant::Primary
                        loading=pending
                        class="w-full"
                        attr:type="submit"
                    >
                        {t!("password_reset.request_submit").to_string()}
                    </Button>
                </form>
            </div>
        </Layout>
    }
}
