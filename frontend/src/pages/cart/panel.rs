use leptos::*;
use rust_i18n::t;

use super::repository::CartRepository;
use super::utils;
use crate::api::{use_api, ApiError, CancelToken, CartItemResponse};
use crate::components::common::{Button, ButtonVariant};
use crate::components::empty_state::EmptyState;
use crate::components::error::InlineErrorMessage;
use crate::components::layout::{Layout, LoadingSpinner};
use crate::state::auth::{expire_session, use_session};
use crate::utils::{browser, format};

#[component]
pub fn CartPanel() -> impl IntoView {
    let (session, _) = use_session();

    view! {
        <Layout>
            <h1 class="text-2xl font-bold text-fg mb-6">{t!("cart.title").to_string()}</h1>
            <Show
                when=move || session.get().is_authenticated()
                fallback=|| view! {
                    <EmptyState
                        title=t!("cart.login_required").to_string()
                        description=t!("cart.login_hint").to_string()
                    />
                }
            >
                <CartContents/>
            </Show>
        </Layout>
    }
}

#[component]
fn CartContents() -> impl IntoView {
    let (_session, set_session) = use_session();

    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        on_cleanup(move || cancel.cancel());
    }
    let repo = CartRepository::new(use_api().with_cancel(cancel));

    let (refresh, set_refresh) = create_signal(0u32);
    let reload = move || set_refresh.update(|tick| *tick += 1);

    let load_repo = repo.clone();
    let cart = create_local_resource(
        move || refresh.get(),
        move |_| {
            let repo = load_repo.clone();
            async move { repo.load().await }
        },
    );
    create_effect(move |_| {
        if let Some(Err(err)) = cart.get() {
            if err.is_unauthorized() {
                expire_session(set_session);
            }
        }
    });

    // One item mutates at a time; its controls are disabled meanwhile
    // and a failed update simply reloads the authoritative cart.
    let (busy_item, set_busy_item) = create_signal(None::<i64>);
    let (error, set_error) = create_signal(None::<ApiError>);

    let quantity_repo = repo.clone();
    let quantity_action = create_action(move |&(item_id, quantity): &(i64, i32)| {
        let repo = quantity_repo.clone();
        async move { repo.set_quantity(item_id, quantity).await }
    });
    let remove_repo = repo.clone();
    let remove_action = create_action(move |&item_id: &i64| {
        let repo = remove_repo.clone();
        async move { repo.remove_item(item_id).await }
    });
    let clear_repo = repo.clone();
    let clear_action = create_action(move |_: &()| {
        let repo = clear_repo.clone();
        async move { repo.clear().await }
    });

    let settle = move |result: Result<(), ApiError>| {
        set_busy_item.set(None);
        match result {
            Ok(()) => {
                set_error.set(None);
                reload();
            }
            Err(err) => {
                if err.is_unauthorized() {
                    expire_session(set_session);
                    return;
                }
                set_error.set(Some(err));
                reload();
            }
        }
    };
    create_effect(move |_| {
        if let Some(result) = quantity_action.value().get() {
            settle(result);
        }
    });
    create_effect(move |_| {
        if let Some(result) = remove_action.value().get() {
            settle(result);
        }
    });
    create_effect(move |_| {
        if let Some(result) = clear_action.value().get() {
            settle(result);
        }
    });

    let change_quantity = move |item: &CartItemResponse, delta: i32| {
        let next = utils::next_quantity(item.quantity, delta);
        if next == item.quantity {
            return;
        }
        set_busy_item.set(Some(item.id));
        quantity_action.dispatch((item.id, next));
    };

    // Checkout form.
    let (address, set_address) = create_signal(String::new());
    let checkout_repo = repo.clone();
    let checkout_action = create_action(move |address: &String| {
        let repo = checkout_repo.clone();
        let address = address.clone();
        async move { repo.checkout(&address).await }
    });
    let checking_out = checkout_action.pending();
    create_effect(move |_| {
        if let Some(result) = checkout_action.value().get() {
            match result {
                Ok(order) => browser::redirect_to(&format!("/payment/{}", order.id)),
                Err(err) => {
                    if err.is_unauthorized() {
                        expire_session(set_session);
                    } else {
                        set_error.set(Some(err));
                    }
                }
            }
        }
    });
    let on_checkout = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if checking_out.get_untracked() {
            return;
        }
        let address_value = address.get_untracked();
        if !utils::validate_address(&address_value) {
            set_error.set(Some(ApiError::server(
                400,
                t!("cart.address_required").to_string(),
            )));
            return;
        }
        checkout_action.dispatch(address_value);
    };

    view! {
        <InlineErrorMessage error=error.into()/>
        {move || match cart.get() {
            None => view! { <LoadingSpinner/> }.into_view(),
            Some(Err(err)) => err.into_view(),
            Some(Ok(cart_data)) if cart_data.is_empty() => view! {
                <EmptyState
                    title=t!("cart.empty").to_string()
                    description=t!("cart.empty_hint").to_string()
                />
            }
            .into_view(),
            Some(Ok(cart_data)) => {
                let total = cart_data.total_amount;
                view! {
                    <div class="space-y-4">
                        <div class="rounded-lg border border-border bg-surface-elevated divide-y divide-border">
                            {cart_data
                                .items
                                .into_iter()
                                .map(|item| {
                                    let item_busy = item.id;
                                    let disabled = Signal::derive(move || busy_item.get() == Some(item_busy));
                                    let min_reached = item.quantity <= 1;
                                    let decrement_item = item.clone();
                                    let increment_item = item.clone();
                                    let remove_id = item.id;
                                    view! {
                                        <div class="flex items-center justify-between gap-4 p-4">
                                            <div class="flex-1">
                                                <p class="font-medium text-fg">{item.product_name.clone()}</p>
                                                <p class="text-sm text-fg-muted">
                                                    {format::format_price(item.price_at_time)}
                                                </p>
                                            </div>
                                            <div class="flex items-center rounded-md border border-border">
                                                <button
                                                    type="button"
                                                    class="px-3 py-1 text-fg hover:bg-surface-muted disabled:opacity-50"
                                                    disabled=move || disabled.get() || min_reached
                                                    on:click={
                                                        let item = decrement_item.clone();
                                                        move |_| change_quantity(&item, -1)
                                                    }
                                                >
                                                    {"−"}
                                                </button>
                                                <span class="px-3 py-1 text-sm font-medium text-fg">
                                                    {item.quantity}
                                                </span>
                                                <button
                                                    type="button"
                                                    class="px-3 py-1 text-fg hover:bg-surface-muted disabled:opacity-50"
                                                    disabled=disabled
                                                    on:click={
                                                        let item = increment_item.clone();
                                                        move |_| change_quantity(&item, 1)
                                                    }
                                                >
                                                    {"+"}
                                                </button>
                                            </div>
                                            <span class="w-24 text-right font-medium text-fg">
                                                {format::format_price(item.total_price)}
                                            </span>
                                            <button
                                                type="button"
                                                class="text-sm text-status-error-text hover:underline disabled:opacity-50"
                                                disabled=disabled
                                                on:click=move |_| {
                                                    set_busy_item.set(Some(remove_id));
                                                    remove_action.dispatch(remove_id);
                                                }
                                            >
                                                {t!("common.remove").to_string()}
                                            </button>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="flex items-center justify-between">
                            <Button
                                variant=ButtonVariant::Ghost
                                on:click=move |_| clear_action.dispatch(())
                            >
                                {t!("cart.clear").to_string()}
                            </Button>
                            <p class="text-lg font-semibold text-fg">
                                {t!("cart.total").to_string()}
                                {": "}
                                {format::format_price(total)}
                            </p>
                        </div>

                        <form
                            class="rounded-lg border border-border bg-surface-elevated p-4 space-y-3"
                            on:submit=on_checkout
                        >
                            <label class="block text-sm font-medium text-fg-muted" for="shipping-address">
                                {t!("cart.shipping_address").to_string()}
                            </label>
                            <textarea
                                id="shipping-address"
                                rows=2
                                class="w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                                prop:value=address
                                on:input=move |ev| set_address.set(event_target_value(&ev))
                            ></textarea>
                            <Button
                                variant=ButtonVariant::Primary
                                loading=checking_out
                                attr:type="submit"
                            >
                                {t!("cart.checkout").to_string()}
                            </Button>
                        </form>
                    </div>
                }
                .into_view()
            }
        }}
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::Session;
    use crate::test_support::ssr::render_with_session;

    #[test]
    fn anonymous_visitors_get_the_login_prompt() {
        let html = render_with_session(Session::anonymous(), || view! { <CartPanel/> });
        assert!(html.contains("Sign in to see your cart"));
    }
}
