use leptos::*;
use rust_i18n::t;

use crate::api::{use_api, CancelToken};
use crate::components::layout::{Layout, LoadingSpinner};
use crate::pages::products::components::card::ProductCard;
use crate::state::locale;

/// Category tiles shown on the landing page.
pub const FEATURED_CATEGORIES: usize = 6;
/// Products pulled from the first catalog page for the featured strip.
pub const FEATURED_PRODUCTS: u32 = 4;

#[component]
pub fn HomePage() -> impl IntoView {
    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        on_cleanup(move || cancel.cancel());
    }
    let api = use_api().with_cancel(cancel);

    let categories_api = api.clone();
    let categories = create_local_resource(
        || (),
        move |_| {
            let api = categories_api.clone();
            async move {
                api.list_categories(0, 50)
                    .await
                    .map(|mut all| {
                        all.truncate(FEATURED_CATEGORIES);
                        all
                    })
                    .unwrap_or_default()
            }
        },
    );

    let featured = create_local_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { api.list_products(0, FEATURED_PRODUCTS).await }
        },
    );

    view! {
        <Layout>
            <section class="rounded-xl bg-action-primary-bg text-action-primary-text px-8 py-16 text-center space-y-4">
                <h1 class="text-4xl font-bold">{t!("home.hero_title").to_string()}</h1>
                <p class="text-lg opacity-90">{t!("home.hero_subtitle").to_string()}</p>
                <a
                    href="/products"
                    class="inline-block rounded-md bg-surface-elevated text-fg px-6 py-3 text-sm font-semibold hover:bg-surface-muted"
                >
                    {t!("home.browse_products").to_string()}
                </a>
            </section>

            <section class="mt-10">
                <h2 class="text-2xl font-semibold text-fg mb-4">
                    {t!("home.categories").to_string()}
                </h2>
                <div class="grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-6 gap-4">
                    {move || categories
                        .get()
                        .unwrap_or_default()
                        .into_iter()
                        .map(|category| {
                            let href = format!("/products?category={}", category.id);
                            let label = locale::translated_category(&category.name);
                            view! {
                                <a
                                    href=href
                                    class="rounded-lg border border-border bg-surface-elevated p-6 text-center font-medium text-fg hover:border-border-strong hover:shadow-sm"
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="mt-10">
                <h2 class="text-2xl font-semibold text-fg mb-4">
                    {t!("home.featured").to_string()}
                </h2>
                {move || match featured.get() {
                    None => view! { <LoadingSpinner/> }.into_view(),
                    Some(Err(err)) => err.into_view(),
                    Some(Ok(page)) => view! {
                        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
                            {page
                                .content
                                .into_iter()
                                .map(|product| view! { <ProductCard product=product/> })
                                .collect_view()}
                        </div>
                    }
                    .into_view(),
                }}
            </section>
        </Layout>
    }
}
