use leptos::*;
use rust_i18n::t;

use crate::api::{use_api, ApiError, CancelToken, OrderStatus, ADMIN_PAGE_SIZE};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::empty_state::EmptyState;
use crate::components::error::InlineErrorMessage;
use crate::components::layout::LoadingSpinner;
use crate::components::pagination::Pagination;
use crate::pages::orders::utils::{status_badge_class, status_label};
use crate::state::auth::{expire_session, use_session};
use crate::utils::format;

#[component]
pub fn AdminOrdersTab() -> impl IntoView {
    let (_session, set_session) = use_session();

    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        on_cleanup(move || cancel.cancel());
    }
    let api = use_api().with_cancel(cancel);

    let (page, set_page) = create_signal(0u32);
    let (refresh, set_refresh) = create_signal(0u32);
    let reload = move || set_refresh.update(|tick| *tick += 1);

    let load_api = api.clone();
    let orders = create_local_resource(
        move || (page.get(), refresh.get()),
        move |(page, _)| {
            let api = load_api.clone();
            async move { api.list_all_orders(page, ADMIN_PAGE_SIZE).await }
        },
    );
    create_effect(move |_| {
        if let Some(Err(err)) = orders.get() {
            if err.is_unauthorized() {
                expire_session(set_session);
            }
        }
    });

    let (error, set_error) = create_signal(None::<ApiError>);
    let (deleting, set_deleting) = create_signal(None::<i64>);

    let status_api = api.clone();
    let status_action = create_action(move |&(id, status): &(i64, OrderStatus)| {
        let api = status_api.clone();
        async move { api.update_order_status(id, status).await }
    });
    let delete_action = create_action(move |&id: &i64| {
        let api = api.clone();
        async move { api.delete_order(id).await }
    });

    let settle = move |result: Result<(), ApiError>| match result {
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
    };
    create_effect(move |_| {
        if let Some(result) = status_action.value().get() {
            settle(result);
        }
    });
    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            set_deleting.set(None);
            settle(result);
        }
    });

    let total_pages = Signal::derive(move || {
        orders
            .get()
            .and_then(|r| r.ok())
            .map(|p| p.total_pages)
            .unwrap_or(0)
    });

    view! {
        <InlineErrorMessage error=error.into()/>
        {move || match orders.get() {
            None => view! { <LoadingSpinner/> }.into_view(),
            Some(Err(err)) => err.into_view(),
            Some(Ok(page_data)) if page_data.is_empty() => view! {
                <EmptyState title=t!("admin.orders_empty").to_string()/>
            }
            .into_view(),
            Some(Ok(page_data)) => view! {
                <div class="overflow-x-auto rounded-lg border border-border bg-surface-elevated">
                    <table class="min-w-full divide-y divide-border text-sm">
                        <thead class="bg-surface-muted text-left text-fg-muted">
                            <tr>
                                <th class="px-4 py-3 font-medium">{t!("admin.col_order").to_string()}</th>
                                <th class="px-4 py-3 font-medium">{t!("admin.col_customer").to_string()}</th>
                                <th class="px-4 py-3 font-medium">{t!("admin.col_date").to_string()}</th>
                                <th class="px-4 py-3 font-medium">{t!("admin.col_total").to_string()}</th>
                                <th class="px-4 py-3 font-medium">{t!("admin.col_status").to_string()}</th>
                                <th class="px-4 py-3"></th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            {page_data
                                .content
                                .into_iter()
                                .map(|order| {
                                    let id = order.id;
                                    let current_status = order.status;
                                    let badge = status_badge_class(current_status);
                                    let href = format!("/orders/{}", id);
                                    view! {
                                        <tr>
                                            <td class="px-4 py-3">
                                                <a class="font-medium text-fg hover:underline" href=href>
                                                    {t!("orders.order_number", id = id).to_string()}
                                                </a>
                                            </td>
                                            <td class="px-4 py-3 text-fg-muted">{order.customer_label()}</td>
                                            <td class="px-4 py-3 text-fg-muted">
                                                {order
                                                    .created_date
                                                    .as_deref()
                                                    .map(format::format_date)
                                                    .unwrap_or_default()}
                                            </td>
                                            <td class="px-4 py-3 font-medium text-fg">
                                                {format::format_price(order.total_amount)}
                                            </td>
                                            <td class="px-4 py-3">
                                                <select
                                                    class=format!(
                                                        "rounded-md border border-border px-2 py-1 text-xs font-semibold {}",
                                                        badge
                                                    )
                                                    on:change=move |ev| {
                                                        let value = event_target_value(&ev);
                                                        if let Some(status) = OrderStatus::SELECTABLE
                                                            .into_iter()
                                                            .find(|s| s.as_str() == value)
                                                        {
                                                            if status != current_status {
                                                                status_action.dispatch((id, status));
                                                            }
                                                        }
                                                    }
                                                >
                                                    {OrderStatus::SELECTABLE
                                                        .into_iter()
                                                        .map(|option| view! {
                                                            <option
                                                                value=option.as_str()
                                                                selected=option == current_status
                                                            >
                                                                {status_label(option)}
                                                            </option>
                                                        })
                                                        .collect_view()}
                                                </select>
                                            </td>
                                            <td class="px-4 py-3 text-right">
                                                <button
                                                    type="button"
                                                    class="text-xs font-medium text-status-error-text hover:underline"
                                                    on:click=move |_| set_deleting.set(Some(id))
                                                >
                                                    {t!("common.delete").to_string()}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </div>
            }
            .into_view(),
        }}
        <Pagination
            page=page
            total_pages=total_pages
            on_change=Callback::new(move |next| set_page.set(next))
        />
        <ConfirmDialog
            is_open=Signal::derive(move || deleting.get().is_some())
            title=t!("admin.delete_order_title").to_string()
            message=Signal::derive(move || {
                t!(
                    "admin.delete_order_message",
                    id = deleting.get().unwrap_or_default()
                )
                .to_string()
            })
            destructive=true
            on_confirm=Callback::new(move |_| {
                if let Some(id) = deleting.get_untracked() {
                    delete_action.dispatch(id);
                }
            })
            on_cancel=Callback::new(move |_| set_deleting.set(None))
        />
    }
}
