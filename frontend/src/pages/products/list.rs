use leptos::*;
use leptos_router::use_query_map;
use rust_i18n::t;

use super::components::card::ProductCard;
use super::repository::{ListQuery, ProductsRepository};
use super::utils;
use crate::api::{use_api, CancelToken};
use crate::components::empty_state::EmptyState;
use crate::components::layout::{Layout, LoadingSpinner};
use crate::components::pagination::Pagination;
use crate::utils::browser;

#[component]
pub fn ProductListPanel() -> impl IntoView {
    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        on_cleanup(move || cancel.cancel());
    }
    let repo = ProductsRepository::new(use_api().with_cancel(cancel));

    let query = use_query_map();
    let mode = create_memo(move |_| {
        query.with(|q| ListQuery::from_params(q.get("search"), q.get("category")))
    });
    let page = create_memo(move |_| query.with(|q| utils::parse_page(q.get("page"))));

    let products = create_local_resource(
        move || (mode.get(), page.get()),
        move |(mode, page)| {
            let repo = repo.clone();
            async move { repo.load_page(&mode, page).await }
        },
    );

    let total_pages = Signal::derive(move || {
        products
            .get()
            .and_then(|r| r.ok())
            .map(|p| p.total_pages)
            .unwrap_or(0)
    });
    let on_page_change = Callback::new(move |next: u32| {
        browser::redirect_to(&utils::list_path(&mode.get_untracked(), next));
    });

    let heading = move || match mode.get() {
        ListQuery::All => t!("products.heading").to_string(),
        ListQuery::Search(term) => t!("products.search_heading", term = term).to_string(),
        ListQuery::Category(_) => t!("products.category_heading").to_string(),
    };

    view! {
        <Layout>
            <h1 class="text-2xl font-bold text-fg mb-6">{heading}</h1>
            {move || match products.get() {
                None => view! { <LoadingSpinner/> }.into_view(),
                Some(Err(err)) => err.into_view(),
                Some(Ok(page_data)) if page_data.is_empty() => view! {
                    <EmptyState
                        title=t!("products.empty").to_string()
                        description=t!("products.empty_hint").to_string()
                    />
                }
                .into_view(),
                Some(Ok(page_data)) => view! {
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-5 gap-4">
                        {page_data
                            .content
                            .into_iter()
                            .map(|product| view! { <ProductCard product=product/> })
                            .collect_view()}
                    </div>
                }
                .into_view(),
            }}
            <Pagination page=Signal::derive(move || page.get()) total_pages=total_pages on_change=on_page_change/>
        </Layout>
    }
}
