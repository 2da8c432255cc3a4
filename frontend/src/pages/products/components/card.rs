use leptos::*;
use rust_i18n::t;

use crate::api::{use_api, ApiError, CancelToken, ProductResponse};
use crate::components::common::{Button, ButtonVariant};
use crate::state::auth::use_session;
use crate::utils::{browser, format};

/// One catalog tile: image, name linking to the detail page, price and
/// stock badges, and a one-click add-to-cart. Adding requires a login;
/// anonymous visitors are sent to the login form instead.
#[component]
pub fn ProductCard(product: ProductResponse) -> impl IntoView {
    let (session, _) = use_session();

    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        on_cleanup(move || cancel.cancel());
    }
    let api = use_api().with_cancel(cancel);

    let product_id = product.id;
    let out_of_stock = product.is_out_of_stock();
    let low_stock = product.is_low_stock();
    let detail_href = format!("/products/{}", product.id);
    let category_label = product.category_label().map(str::to_string);

    let add_action = create_action(move |&id: &i64| {
        let api = api.clone();
        async move { api.add_to_cart(id, 1).await }
    });
    let adding = add_action.pending();
    let (error, set_error) = create_signal(None::<ApiError>);
    let (added, set_added) = create_signal(false);
    create_effect(move |_| {
        if let Some(result) = add_action.value().get() {
            match result {
                Ok(()) => {
                    set_error.set(None);
                    set_added.set(true);
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_add = move |_| {
        if !session.get_untracked().is_authenticated() {
            browser::redirect_to("/login");
            return;
        }
        set_added.set(false);
        add_action.dispatch(product_id);
    };

    view! {
        <div class="rounded-lg border border-border bg-surface-elevated shadow-sm overflow-hidden flex flex-col">
            <a href=detail_href.clone() class="block aspect-square bg-surface-muted">
                {match &product.image {
                    Some(src) => view! {
                        <img class="h-full w-full object-cover" src=src.clone() alt=product.name.clone()/>
                    }
                    .into_view(),
                    None => view! {
                        <div class="h-full w-full flex items-center justify-center text-fg-muted text-4xl">
                            {"🛍"}
                        </div>
                    }
                    .into_view(),
                }}
            </a>
            <div class="p-4 flex flex-col gap-2 flex-1">
                <a href=detail_href class="font-semibold text-fg hover:underline">
                    {product.name.clone()}
                </a>
                {category_label.map(|label| view! {
                    <span class="text-xs text-fg-muted">{label}</span>
                })}
                <div class="flex items-center justify-between mt-auto">
                    <span class="text-lg font-semibold text-fg">
                        {format::format_price(product.price)}
                    </span>
                    {if out_of_stock {
                        Some(view! {
                            <span class="text-xs font-medium text-status-error-text bg-status-error-bg rounded px-2 py-0.5">
                                {t!("products.out_of_stock").to_string()}
                            </span>
                        })
                    } else if low_stock {
                        Some(view! {
                            <span class="text-xs font-medium text-status-warning-text bg-status-warning-bg rounded px-2 py-0.5">
                                {t!("products.low_stock", count = product.stock).to_string()}
                            </span>
                        })
                    } else {
                        None
                    }}
                </div>
                <Button
                    variant=ButtonVariant::Primary
                    disabled=Signal::derive(move || out_of_stock)
                    loading=adding
                    on:click=on_add
                >
                    {move || if added.get() {
                        t!("products.added_to_cart").to_string()
                    } else {
                        t!("products.add_to_cart").to_string()
                    }}
                </Button>
                {move || error.get().map(|err| view! {
                    <p class="text-xs text-status-error-text">{err.to_string()}</p>
                })}
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{customer_session, product};
    use crate::test_support::ssr::render_with_session;

    #[test]
    fn card_links_to_the_detail_page() {
        let html =
            render_with_session(customer_session(), || view! { <ProductCard product=product(9, "Baklava", 20)/> });
        assert!(html.contains("href=\"/products/9\""));
        assert!(html.contains("Baklava"));
        assert!(html.contains("$12.50"));
    }

    #[test]
    fn card_flags_low_stock() {
        let html =
            render_with_session(customer_session(), || view! { <ProductCard product=product(9, "Baklava", 3)/> });
        assert!(html.contains("left in stock"));
    }

    #[test]
    fn card_disables_adding_when_out_of_stock() {
        let html =
            render_with_session(customer_session(), || view! { <ProductCard product=product(9, "Baklava", 0)/> });
        assert!(html.contains("Out of stock"));
        assert!(html.contains("disabled"));
    }
}
