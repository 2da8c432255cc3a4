use leptos::*;
use leptos_router::use_params_map;
use rust_i18n::t;

use crate::api::{use_api, ApiError, CancelToken};
use crate::components::common::Avatar;
use crate::components::layout::{Layout, LoadingSpinner};
use crate::pages::products::utils::parse_id;

/// Public profile card for an account, reachable from the user menu.
#[component]
pub fn UserPage() -> impl IntoView {
    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        on_cleanup(move || cancel.cancel());
    }
    let api = use_api().with_cancel(cancel);

    let params = use_params_map();
    let user_id = create_memo(move |_| params.with(|p| parse_id(p.get("id"))));

    let user = create_local_resource(
        move || user_id.get(),
        move |id| {
            let api = api.clone();
            async move {
                match id {
                    Some(id) => api.get_user(id).await,
                    None => Err(ApiError::server(404, "User not found")),
                }
            }
        },
    );

    view! {
        <Layout>
            <div class="max-w-md mx-auto mt-8">
                {move || match user.get() {
                    None => view! { <LoadingSpinner/> }.into_view(),
                    Some(Err(err)) => err.into_view(),
                    Some(Ok(user)) => view! {
                        <div class="rounded-lg border border-border bg-surface-elevated p-8 flex flex-col items-center gap-4">
                            <Avatar
                                username=user.username.clone()
                                image=user.image.clone()
                                class="h-24 w-24 text-3xl"
                            />
                            <h1 class="text-2xl font-bold text-fg">{user.username.clone()}</h1>
                            {user.email.clone().map(|email| view! {
                                <p class="text-sm text-fg-muted">{email}</p>
                            })}
                            <span class="text-xs uppercase tracking-wide text-fg-muted">
                                {t!("user.role", role = user.role.as_str()).to_string()}
                            </span>
                        </div>
                    }
                    .into_view(),
                }}
            </div>
        </Layout>
    }
}
