use leptos::*;
use leptos_router::use_query_map;
use rust_i18n::t;

use super::utils;
use crate::api::{use_api, CancelToken, OrderResponse, ORDER_PAGE_SIZE};
use crate::components::empty_state::EmptyState;
use crate::components::layout::{Layout, LoadingSpinner};
use crate::components::pagination::Pagination;
use crate::pages::products::utils::parse_page;
use crate::state::auth::{expire_session, use_session};
use crate::utils::{browser, format};

#[component]
pub fn OrderListPanel() -> impl IntoView {
    let (session, _) = use_session();

    view! {
        <Layout>
            <h1 class="text-2xl font-bold text-fg mb-6">{t!("orders.title").to_string()}</h1>
            <Show
                when=move || session.get().is_authenticated()
                fallback=|| view! {
                    <EmptyState
                        title=t!("orders.login_required").to_string()
                        description=t!("orders.login_hint").to_string()
                    />
                }
            >
                <OrderHistory/>
            </Show>
        </Layout>
    }
}

#[component]
fn OrderHistory() -> impl IntoView {
    let (_session, set_session) = use_session();

    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        on_cleanup(move || cancel.cancel());
    }
    let api = use_api().with_cancel(cancel);

    let query = use_query_map();
    let page = create_memo(move |_| query.with(|q| parse_page(q.get("page"))));

    let orders = create_local_resource(
        move || page.get(),
        move |page| {
            let api = api.clone();
            async move { api.list_orders(page, ORDER_PAGE_SIZE).await }
        },
    );
    create_effect(move |_| {
        if let Some(Err(err)) = orders.get() {
            if err.is_unauthorized() {
                expire_session(set_session);
            }
        }
    });

    let total_pages = Signal::derive(move || {
        orders
            .get()
            .and_then(|r| r.ok())
            .map(|p| p.total_pages)
            .unwrap_or(0)
    });
    let on_page_change = Callback::new(move |next: u32| {
        browser::redirect_to(&utils::history_path(next));
    });

    view! {
        {move || match orders.get() {
            None => view! { <LoadingSpinner/> }.into_view(),
            Some(Err(err)) => err.into_view(),
            Some(Ok(page_data)) if page_data.is_empty() => view! {
                <EmptyState
                    title=t!("orders.empty").to_string()
                    description=t!("orders.empty_hint").to_string()
                />
            }
            .into_view(),
            Some(Ok(page_data)) => view! {
                <div class="space-y-3">
                    {page_data
                        .content
                        .into_iter()
                        .map(|order| view! { <OrderRow order=order/> })
                        .collect_view()}
                </div>
            }
            .into_view(),
        }}
        <Pagination page=Signal::derive(move || page.get()) total_pages=total_pages on_change=on_page_change/>
    }
}

#[component]
fn OrderRow(order: OrderResponse) -> impl IntoView {
    let badge = utils::status_badge_class(order.status);
    let detail_href = format!("/orders/{}", order.id);
    let payment_path = format!("/payment/{}", order.id);
    let payable = order.is_payable();

    view! {
        <div class="flex flex-wrap items-center justify-between gap-4 rounded-lg border border-border bg-surface-elevated p-4">
            <div>
                <a class="font-semibold text-fg hover:underline" href=detail_href>
                    {t!("orders.order_number", id = order.id).to_string()}
                </a>
                {order.created_date.as_deref().map(|raw| view! {
                    <p class="text-sm text-fg-muted">{format::format_date(raw)}</p>
                })}
            </div>
            <span class=format!("rounded-full px-3 py-1 text-xs font-semibold {}", badge)>
                {utils::status_label(order.status)}
            </span>
            <span class="font-medium text-fg">{format::format_price(order.total_amount)}</span>
            <Show when=move || payable>
                <a
                    class="rounded-md bg-action-primary-bg px-4 py-2 text-sm font-semibold text-action-primary-text hover:bg-action-primary-bg-hover"
                    href=payment_path.clone()
                >
                    {t!("orders.pay_now").to_string()}
                </a>
            </Show>
        </div>
    }
}
