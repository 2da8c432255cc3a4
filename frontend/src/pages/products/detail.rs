use leptos::*;
use leptos_router::use_params_map;
use rust_i18n::t;

use super::components::reviews::ReviewsSection;
use super::repository::ProductsRepository;
use super::utils;
use crate::api::{use_api, ApiError, CancelToken, ProductResponse};
use crate::components::common::{Button, ButtonVariant, StarRating};
use crate::components::layout::{Layout, LoadingSpinner};
use crate::state::auth::use_session;
use crate::utils::{browser, format};

#[component]
pub fn ProductDetailPanel() -> impl IntoView {
    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        on_cleanup(move || cancel.cancel());
    }
    let api = use_api().with_cancel(cancel);
    let repo = ProductsRepository::new(api.clone());

    let params = use_params_map();
    let product_id = create_memo(move |_| params.with(|p| utils::parse_id(p.get("id"))));

    let product = create_local_resource(
        move || product_id.get(),
        move |id| {
            let repo = repo.clone();
            async move {
                match id {
                    Some(id) => repo.load_detail(id).await,
                    None => Err(ApiError::server(404, "Product not found")),
                }
            }
        },
    );

    // Re-read whenever the reviews section reports a change, so the
    // average keeps up with new and deleted reviews.
    let (rating_tick, set_rating_tick) = create_signal(0u32);
    let rating_api = api.clone();
    let rating = create_local_resource(
        move || (product_id.get(), rating_tick.get()),
        move |(id, _)| {
            let api = rating_api.clone();
            async move {
                match id {
                    Some(id) => api.product_rating(id).await.map(|summary| summary.value()).ok(),
                    None => None,
                }
            }
        },
    );
    let on_reviews_changed = Callback::new(move |_| set_rating_tick.update(|tick| *tick += 1));

    view! {
        <Layout>
            {move || match product.get() {
                None => view! { <LoadingSpinner/> }.into_view(),
                Some(Err(err)) => err.into_view(),
                Some(Ok(product)) => {
                    let average = rating.get().flatten().unwrap_or(0.0);
                    view! {
                        <ProductDetailBody product=product average_rating=average/>
                    }
                    .into_view()
                }
            }}
            {move || product_id.get().map(|id| view! {
                <ReviewsSection product_id=id on_changed=on_reviews_changed/>
            })}
        </Layout>
    }
}

#[component]
fn ProductDetailBody(product: ProductResponse, average_rating: f64) -> impl IntoView {
    let (session, _) = use_session();

    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        on_cleanup(move || cancel.cancel());
    }
    let api = use_api().with_cancel(cancel);

    let product_id = product.id;
    let stock = product.stock;
    let out_of_stock = product.is_out_of_stock();

    let (quantity, set_quantity) = create_signal(1i32);
    let adjust = move |delta: i32| {
        set_quantity.update(|q| *q = utils::clamp_quantity(*q + delta, stock));
    };

    let add_action = create_action(move |&(id, quantity): &(i64, i32)| {
        let api = api.clone();
        async move { api.add_to_cart(id, quantity).await }
    });
    let adding = add_action.pending();
    let (feedback, set_feedback) = create_signal(None::<Result<(), ApiError>>);
    create_effect(move |_| {
        if let Some(result) = add_action.value().get() {
            set_feedback.set(Some(result));
        }
    });
    let on_add = move |_| {
        if !session.get_untracked().is_authenticated() {
            browser::redirect_to("/login");
            return;
        }
        add_action.dispatch((product_id, quantity.get_untracked()));
    };

    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
            <div class="rounded-lg bg-surface-muted aspect-square overflow-hidden">
                {match &product.image {
                    Some(src) => view! {
                        <img class="h-full w-full object-cover" src=src.clone() alt=product.name.clone()/>
                    }
                    .into_view(),
                    None => view! {
                        <div class="h-full w-full flex items-center justify-center text-fg-muted text-6xl">
                            {"🛍"}
                        </div>
                    }
                    .into_view(),
                }}
            </div>
            <div class="space-y-4">
                <h1 class="text-3xl font-bold text-fg">{product.name.clone()}</h1>
                {product.category_label().map(|label| {
                    let label = label.to_string();
                    view! { <p class="text-sm text-fg-muted">{label}</p> }
                })}
                <div class="flex items-center gap-2">
                    <StarRating rating={average_rating.round() as i32}/>
                    <span class="text-sm text-fg-muted">{format!("{:.1}", average_rating)}</span>
                </div>
                <p class="text-2xl font-semibold text-fg">{format::format_price(product.price)}</p>
                {product.description.clone().map(|text| view! {
                    <p class="text-fg-muted">{text}</p>
                })}
                <p class="text-sm text-fg-muted">
                    {if out_of_stock {
                        t!("products.out_of_stock").to_string()
                    } else {
                        t!("products.in_stock", count = stock).to_string()
                    }}
                </p>
                <div class="flex items-center gap-3">
                    <div class="flex items-center rounded-md border border-border">
                        <button
                            type="button"
                            class="px-3 py-1.5 text-fg hover:bg-surface-muted disabled:opacity-50"
                            disabled=move || quantity.get() <= 1
                            on:click=move |_| adjust(-1)
                        >
                            {"−"}
                        </button>
                        <span class="px-4 py-1.5 text-sm font-medium text-fg">
                            {move || quantity.get()}
                        </span>
                        <button
                            type="button"
                            class="px-3 py-1.5 text-fg hover:bg-surface-muted disabled:opacity-50"
                            disabled=move || quantity.get() >= stock
                            on:click=move |_| adjust(1)
                        >
                            {"+"}
                        </button>
                    </div>
                    <Button
                        variant=ButtonVariant::Primary
                        disabled=Signal::derive(move || out_of_stock)
                        loading=adding
                        on:click=on_add
                    >
                        {t!("products.add_to_cart").to_string()}
                    </Button>
                </div>
                {move || feedback.get().map(|result| match result {
                    Ok(()) => view! {
                        <p class="text-sm text-status-success-text">
                            {t!("products.added_to_cart").to_string()}
                        </p>
                    }
                    .into_view(),
                    Err(err) => view! {
                        <p class="text-sm text-status-error-text">{err.to_string()}</p>
                    }
                    .into_view(),
                })}
            </div>
        </div>
    }
}
