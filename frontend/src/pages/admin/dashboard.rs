use leptos::*;
use rust_i18n::t;

use crate::api::{use_api, CancelToken};
use crate::components::layout::LoadingSpinner;
use crate::pages::orders::utils::{status_badge_class, status_label};
use crate::state::auth::{expire_session, use_session};
use crate::utils::format;

const RECENT_ORDER_COUNT: u32 = 5;

#[component]
pub fn AdminDashboardTab() -> impl IntoView {
    let (_session, set_session) = use_session();

    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        on_cleanup(move || cancel.cancel());
    }
    let api = use_api().with_cancel(cancel);

    let stats_api = api.clone();
    let stats = create_local_resource(
        || (),
        move |_| {
            let api = stats_api.clone();
            async move { api.admin_stats().await }
        },
    );
    let recent = create_local_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { api.list_all_orders(0, RECENT_ORDER_COUNT).await }
        },
    );
    create_effect(move |_| {
        let unauthorized = matches!(stats.get(), Some(Err(ref err)) if err.is_unauthorized())
            || matches!(recent.get(), Some(Err(ref err)) if err.is_unauthorized());
        if unauthorized {
            expire_session(set_session);
        }
    });

    view! {
        <div class="space-y-8">
            {move || match stats.get() {
                None => view! { <LoadingSpinner/> }.into_view(),
                Some(Err(err)) => err.into_view(),
                Some(Ok(stats)) => view! {
                    <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                        <StatCard label=t!("admin.stat_users").to_string() value=stats.users/>
                        <StatCard label=t!("admin.stat_products").to_string() value=stats.products/>
                        <StatCard label=t!("admin.stat_orders").to_string() value=stats.orders/>
                    </div>
                }
                .into_view(),
            }}

            <div>
                <h2 class="text-lg font-semibold text-fg mb-3">
                    {t!("admin.recent_orders").to_string()}
                </h2>
                {move || match recent.get() {
                    None => view! { <LoadingSpinner/> }.into_view(),
                    Some(Err(err)) => err.into_view(),
                    Some(Ok(page)) => view! {
                        <div class="rounded-lg border border-border bg-surface-elevated divide-y divide-border">
                            {page
                                .content
                                .into_iter()
                                .map(|order| {
                                    let badge = status_badge_class(order.status);
                                    let href = format!("/orders/{}", order.id);
                                    view! {
                                        <div class="flex items-center justify-between gap-4 p-3">
                                            <a class="text-sm font-medium text-fg hover:underline" href=href>
                                                {t!("orders.order_number", id = order.id).to_string()}
                                            </a>
                                            <span class="text-sm text-fg-muted">{order.customer_label()}</span>
                                            <span class=format!("rounded-full px-2 py-0.5 text-xs font-semibold {}", badge)>
                                                {status_label(order.status)}
                                            </span>
                                            <span class="text-sm font-medium text-fg">
                                                {format::format_price(order.total_amount)}
                                            </span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_view(),
                }}
            </div>
        </div>
    }
}

#[component]
fn StatCard(label: String, value: i64) -> impl IntoView {
    view! {
        <div class="rounded-lg border border-border bg-surface-elevated p-6">
            <p class="text-sm font-medium text-fg-muted">{label}</p>
            <p class="mt-1 text-3xl font-bold text-fg">{value}</p>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn stat_card_shows_label_and_count() {
        let html = render_to_string(|| {
            view! { <StatCard label="Users".to_string() value=42/> }
        });
        assert!(html.contains("Users"));
        assert!(html.contains("42"));
    }
}
