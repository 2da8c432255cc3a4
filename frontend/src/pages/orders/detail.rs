use leptos::*;
use leptos_router::use_params_map;
use rust_i18n::t;

use super::utils;
use crate::api::{use_api, ApiError, CancelToken, OrderResponse};
use crate::components::common::{Button, ButtonVariant};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::error::InlineErrorMessage;
use crate::components::layout::{Layout, LoadingSpinner};
use crate::pages::products::utils::parse_id;
use crate::state::auth::{expire_session, use_session};
use crate::utils::format;

#[component]
pub fn OrderDetailPanel() -> impl IntoView {
    let (_session, set_session) = use_session();

    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        on_cleanup(move || cancel.cancel());
    }
    let api = use_api().with_cancel(cancel);

    let params = use_params_map();
    let order_id = create_memo(move |_| params.with(|p| parse_id(p.get("id"))));

    let (refresh, set_refresh) = create_signal(0u32);

    let load_api = api.clone();
    let order = create_local_resource(
        move || (order_id.get(), refresh.get()),
        move |(id, _)| {
            let api = load_api.clone();
            async move {
                match id {
                    Some(id) => api.get_order(id).await,
                    None => Err(ApiError::server(404, "Order not found")),
                }
            }
        },
    );
    create_effect(move |_| {
        if let Some(Err(err)) = order.get() {
            if err.is_unauthorized() {
                expire_session(set_session);
            }
        }
    });

    let (confirming_cancel, set_confirming_cancel) = create_signal(false);
    let (error, set_error) = create_signal(None::<ApiError>);

    let cancel_action = create_action(move |&id: &i64| {
        let api = api.clone();
        async move { api.cancel_order(id).await }
    });
    let cancelling = cancel_action.pending();
    create_effect(move |_| {
        if let Some(result) = cancel_action.value().get() {
            set_confirming_cancel.set(false);
            match result {
                Ok(()) => {
                    set_error.set(None);
                    set_refresh.update(|tick| *tick += 1);
                }
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

    view! {
        <Layout>
            <InlineErrorMessage error=error.into()/>
            {move || match order.get() {
                None => view! { <LoadingSpinner/> }.into_view(),
                Some(Err(err)) => err.into_view(),
                Some(Ok(order_data)) => {
                    let id = order_data.id;
                    view! {
                        <OrderDetailBody
                            order=order_data
                            on_cancel=Callback::new(move |_| set_confirming_cancel.set(true))
                        />
                        <ConfirmDialog
                            is_open=confirming_cancel.into()
                            title=t!("orders.cancel_title").to_string()
                            message=t!("orders.cancel_message", id = id).to_string()
                            confirm_label=t!("orders.cancel_confirm").to_string()
                            cancel_label=t!("orders.cancel_keep").to_string()
                            confirm_disabled=Signal::derive(move || cancelling.get())
                            destructive=true
                            on_confirm=Callback::new(move |_| cancel_action.dispatch(id))
                            on_cancel=Callback::new(move |_| set_confirming_cancel.set(false))
                        />
                    }
                    .into_view()
                }
            }}
        </Layout>
    }
}

#[component]
fn OrderDetailBody(order: OrderResponse, on_cancel: Callback<()>) -> impl IntoView {
    let badge = utils::status_badge_class(order.status);
    let payable = order.is_payable();
    let payment_path = format!("/payment/{}", order.id);

    view! {
        <div class="space-y-6">
            <div class="flex flex-wrap items-center justify-between gap-4">
                <div>
                    <h1 class="text-2xl font-bold text-fg">
                        {t!("orders.order_number", id = order.id).to_string()}
                    </h1>
                    {order.created_date.as_deref().map(|raw| view! {
                        <p class="text-sm text-fg-muted">{format::format_date_time(raw)}</p>
                    })}
                </div>
                <span class=format!("rounded-full px-3 py-1 text-xs font-semibold {}", badge)>
                    {utils::status_label(order.status)}
                </span>
            </div>

            {order.shipping_address.clone().map(|address| view! {
                <div class="rounded-lg border border-border bg-surface-elevated p-4">
                    <h2 class="text-sm font-semibold text-fg-muted mb-1">
                        {t!("orders.shipping_address").to_string()}
                    </h2>
                    <p class="text-sm text-fg whitespace-pre-line">{address}</p>
                </div>
            })}

            <div class="rounded-lg border border-border bg-surface-elevated divide-y divide-border">
                {order
                    .items
                    .iter()
                    .map(|item| {
                        view! {
                            <div class="flex items-center justify-between gap-4 p-4">
                                <div class="flex-1">
                                    <p class="font-medium text-fg">{item.product_name.clone()}</p>
                                    <p class="text-sm text-fg-muted">
                                        {format!(
                                            "{} × {}",
                                            format::format_price(item.price),
                                            item.quantity
                                        )}
                                    </p>
                                </div>
                                <span class="font-medium text-fg">
                                    {format::format_price(item.line_total())}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="flex items-center justify-between">
                <p class="text-lg font-semibold text-fg">
                    {t!("orders.total").to_string()}
                    {": "}
                    {format::format_price(order.total_amount)}
                </p>
                <Show when=move || payable>
                    <div class="flex gap-2">
                        <Button
                            variant=ButtonVariant::Danger
                            on:click=move |_| on_cancel.call(())
                        >
                            {t!("orders.cancel_order").to_string()}
                        </Button>
                        <a
                            class="inline-flex items-center rounded-md bg-action-primary-bg px-4 py-2 text-sm font-semibold text-action-primary-text hover:bg-action-primary-bg-hover"
                            href=payment_path.clone()
                        >
                            {t!("orders.pay_now").to_string()}
                        </a>
                    </div>
                </Show>
            </div>
        </div>
    }
}
