use leptos::*;
use leptos_router::use_params_map;
use rust_i18n::t;

use crate::api::{use_api, CancelToken};
use crate::components::layout::{ErrorMessage, Layout, LoadingSpinner, SuccessMessage};

/// Account activation from the e-mailed link. The token rides in the
/// path and is submitted once on mount; the page just reports how the
/// backend answered.
#[component]
pub fn ActivationPage() -> impl IntoView {
    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        on_cleanup(move || cancel.cancel());
    }
    let api = use_api().with_cancel(cancel);
    let params = use_params_map();
    let token = create_memo(move |_| params.with(|p| p.get("token").cloned().unwrap_or_default()));

    let activation = create_local_resource(
        move || token.get(),
        move |token| {
            let api = api.clone();
            async move { api.activate(&token).await }
        },
    );

    view! {
        <Layout>
            <div class="max-w-md mx-auto mt-8 rounded-lg border border-border bg-surface-elevated p-8 space-y-4 text-center">
                <h1 class="text-2xl font-bold text-fg">
                    {t!("activation.title").to_string()}
                </h1>
                {move || match activation.get() {
                    None => view! {
                        <div>
                            <LoadingSpinner/>
                            <p class="text-sm text-fg-muted">{t!("activation.in_progress").to_string()}</p>
                        </div>
                    }
                    .into_view(),
                    Some(Ok(response)) => view! {
                        <div>
                            <SuccessMessage message=response.message/>
                            <a href="/login" class="text-sm underline text-fg-muted hover:text-fg">
                                {t!("signup.go_to_login").to_string()}
                            </a>
                        </div>
                    }
                    .into_view(),
                    Some(Err(err)) => view! { <ErrorMessage message=err.to_string()/> }.into_view(),
                }}
            </div>
        </Layout>
    }
}
