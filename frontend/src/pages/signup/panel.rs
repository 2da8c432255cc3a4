use std::collections::BTreeMap;

use leptos::*;
use rust_i18n::t;

use super::utils;
use crate::api::{use_api, ApiError, CancelToken, SignUpRequest};
use crate::components::common::{Button, ButtonVariant};
use crate::components::layout::{ErrorMessage, Layout, SuccessMessage};

#[component]
pub fn SignUpPanel() -> impl IntoView {
    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        on_cleanup(move || cancel.cancel());
    }
    let api = use_api().with_cancel(cancel);

    let (username, set_username) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (password_repeat, set_password_repeat) = create_signal(String::new());

    let (field_errors, set_field_errors) = create_signal(BTreeMap::<String, String>::new());
    let (error, set_error) = create_signal(None::<String>);
    let (success, set_success) = create_signal(None::<String>);

    let signup_action = create_action(move |request: &SignUpRequest| {
        let api = api.clone();
        let request = request.clone();
        async move { api.sign_up(&request).await }
    });
    let pending = signup_action.pending();

    create_effect(move |_| {
        if let Some(result) = signup_action.value().get() {
            match result {
                Ok(response) => {
                    set_error.set(None);
                    set_field_errors.set(BTreeMap::new());
                    set_success.set(Some(response.message));
                }
                Err(err) => {
                    // Backend field errors land under the matching
                    // inputs; anything else shows as a banner.
                    if let ApiError::Server {
                        validation_errors: Some(errors),
                        ..
                    } = &err
                    {
                        set_field_errors.set(errors.clone());
                    }
                    set_error.set(Some(err.to_string()));
                }
            }
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let errors = utils::validate_signup(
            &username.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &password_repeat.get_untracked(),
        );
        if !errors.is_empty() {
            set_field_errors.set(errors);
            return;
        }
        set_field_errors.set(BTreeMap::new());
        set_error.set(None);
        signup_action.dispatch(SignUpRequest {
            username: username.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        });
    };

    let field_error = move |field: &'static str| {
        field_errors.with(|errors| errors.get(field).cloned())
    };

    view! {
        <Layout>
            <div class="max-w-md mx-auto mt-8 rounded-lg border border-border bg-surface-elevated p-8 space-y-6">
                <h1 class="text-2xl font-bold text-fg text-center">
                    {t!("signup.title").to_string()}
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
                        <SignUpField
                            id="username"
                            label=t!("signup.username").to_string()
                            input_type="text"
                            value=username
                            on_input=Callback::new(move |value| set_username.set(value))
                            error=Signal::derive(move || field_error("username"))
                        />
                        <SignUpField
                            id="email"
                            label=t!("signup.email").to_string()
                            input_type="email"
                            value=email
                            on_input=Callback::new(move |value| set_email.set(value))
                            error=Signal::derive(move || field_error("email"))
                        />
                        <SignUpField
                            id="password"
                            label=t!("signup.password").to_string()
                            input_type="password"
                            value=password
                            on_input=Callback::new(move |value| set_password.set(value))
                            error=Signal::derive(move || field_error("password"))
                        />
                        <SignUpField
                            id="password-repeat"
                            label=t!("signup.password_repeat").to_string()
                            input_type="password"
                            value=password_repeat
                            on_input=Callback::new(move |value| set_password_repeat.set(value))
                            error=Signal::derive(move || field_error("passwordRepeat"))
                        />
                        <Button
                            variant=ButtonVariant::Primary
                            loading=pending
                            class="w-full"
                            attr:type="submit"
                        >
                            {t!("signup.submit").to_string()}
                        </Button>
                    </form>
                </Show>
            </div>
        </Layout>
    }
}

#[component]
fn SignUpField(
    id: &'static str,
    label: String,
    input_type: &'static str,
    value: ReadSignal<String>,
    on_input: Callback<String>,
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-fg-muted mb-1" for=id>{label}</label>
            <input
                id=id
                type=input_type
                class=move || {
                    if error.get().is_some() {
                        "w-full rounded-md border border-status-error-border bg-surface px-3 py-2 text-sm text-fg"
                    } else {
                        "w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                    }
                }
                prop:value=value
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
            {move || error.get().map(|message| view! {
                <p class="mt-1 text-xs text-status-error-text">{message}</p>
            })}
        </div>
    }
}
