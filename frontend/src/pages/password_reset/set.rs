use leptos::*;
use leptos_router::use_query_map;
use rust_i18n::t;

use crate::api::{use_api, CancelToken};
use crate::components::common::{Button, ButtonVariant};
use crate::components::layout::{ErrorMessage, Layout, SuccessMessage};
use crate::pages::signup::utils::MIN_PASSWORD;

/// Second half of the reset flow: the e-mailed link carries the token
/// in the query string, the user supplies the replacement password.
#[component]
pub fn PasswordResetSetPanel() -> impl IntoView {
    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        on_cleanup(move || cancel.cancel());
    }
    let api = use_api().with_cancel(cancel);

    let query = use_query_map();
    let token = create_memo(move |_| query.with(|q| q.get("token").cloned().unwrap_or_default()));

    let (password, set_password) = create_signal(String::new());
    let (password_repeat, set_password_repeat) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (success, set_success) = create_signal(None::<String>);

    let set_action = create_action(move |(token, password): &(String, String)| {
        let api = api.clone();
        let token = token.clone();
        let password = password.clone();
        async move { api.set_password(&token, &password).await }
    });
    let pending = set_action.pending();

    create_effect(move |_| {
        if let Some(result) = set_action.value().get() {
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
        let token_value = token.get_untracked();
        if token_value.is_empty() {
            set_error.set(Some(t!("password_reset.missing_token").to_string()));
            return;
        }
        let password_value = password.get_untracked();
        if password_value.chars().count() < MIN_PASSWORD {
            set_error.set(Some(
                t!("signup.password_too_short", min = MIN_PASSWORD).to_string(),
            ));
            return;
        }
        if password_value != password_repeat.get_untracked() {
            set_error.set(Some(t!("signup.password_mismatch").to_string()));
            return;
        }
        set_error.set(None);
        set_action.dispatch((token_value, password_value));
    };

    view! {
        <Layout>
            <div class="max-w-md mx-auto mt-8 rounded-lg border border-border bg-surface-elevated p-8 space-y-6">
                <h1 class="text-2xl font-bold text-fg text-center">
                    {t!("password_reset.set_title").to_string()}
                </h1>
                {move || error.get().map(|message| view! { <ErrorMessage message=message/> })}
                {move || success.get().map(|message| view! {
                    <div>
                        <SuccessMessage message=message/>
                        <p class="text-sm text-center text-fg-muted">
                            <a href="/login" class="underline hover:text-fg">
                                {t!("signup.go_to_login").to_string()}
                            </a>
                        </p>
                    </div>
                })}
                <Show when=move || success.get().is_none()>
                    <form class="space-y-4" on:submit=on_submit>
                        <div>
                            <label class="block text-sm font-medium text-fg-muted mb-1" for="new-password">
                                {t!("password_reset.new_password").to_string()}
                            </label>
                            <input
                                id="new-password"
                                type="password"
                                class="w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                                prop:value=password
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label class="block text-sm font-medium text-fg-muted mb-1" for="new-password-repeat">
                                {t!("signup.password_repeat").to_string()}
                            </label>
                            <input
                                id="new-password-repeat"
                                type="password"
                                class="w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                                prop:value=password_repeat
                                on:input=move |ev| set_password_repeat.set(event_target_value(&ev))
                            />
                        </div>
                        <Button
                            variant=ButtonVariant::Primary
                            loading=pending
                            class="w-full"
                            attr:type="submit"
                        >
                            {t!("password_reset.set_submit").to_string()}
                        </Button>
                    </form>
                </Show>
            </div>
        </Layout>
    }
}
