use leptos::*;
use rust_i18n::t;

use super::utils;
use crate::api::{
    use_api, ApiError, CancelToken, CategoryResponse, ProductPayload, ProductResponse,
    ADMIN_PAGE_SIZE,
};
use crate::components::common::{Button, ButtonVariant};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::empty_state::EmptyState;
use crate::components::error::InlineErrorMessage;
use crate::components::layout::LoadingSpinner;
use crate::components::pagination::Pagination;
use crate::state::auth::{expire_session, use_session};
use crate::utils::format;

/// What the modal is doing: filling in a new product or editing a row.
#[derive(Clone, PartialEq)]
enum Editor {
    Create,
    Edit(ProductResponse),
}

#[component]
pub fn AdminProductsTab() -> impl IntoView {
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
    let products = create_local_resource(
        move || (page.get(), refresh.get()),
        move |(page, _)| {
            let api = load_api.clone();
            async move { api.list_products(page, ADMIN_PAGE_SIZE).await }
        },
    );
    let categories_api = api.clone();
    let categories = create_local_resource(
        || (),
        move |_| {
            let api = categories_api.clone();
            async move { api.list_categories(0, 100).await }
        },
    );
    create_effect(move |_| {
        if let Some(Err(err)) = products.get() {
            if err.is_unauthorized() {
                expire_session(set_session);
            }
        }
    });

    let (editor, set_editor) = create_signal(None::<Editor>);
    let (deleting, set_deleting) = create_signal(None::<ProductResponse>);
    let (error, set_error) = create_signal(None::<ApiError>);

    let save_api = api.clone();
    let save_action = create_action(
        move |(id, payload): &(Option<i64>, ProductPayload)| {
            let api = save_api.clone();
            let id = *id;
            let payload = payload.clone();
            async move {
                match id {
                    Some(id) => api.update_product(id, &payload).await,
                    None => api.create_product(&payload).await,
                }
            }
        },
    );
    let saving = save_action.pending();
    let delete_action = create_action(move |&id: &i64| {
        let api = api.clone();
        async move { api.delete_product(id).await }
    });

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(()) => {
                    set_editor.set(None);
                    set_error.set(None);
                    reload();
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
    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            set_deleting.set(None);
            match result {
                Ok(()) => {
                    set_error.set(None);
                    reload();
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

    let total_pages = Signal::derive(move || {
        products
            .get()
            .and_then(|r| r.ok())
            .map(|p| p.total_pages)
            .unwrap_or(0)
    });
    let category_options = Signal::derive(move || {
        categories
            .get()
            .and_then(|r| r.ok())
            .unwrap_or_default()
    });

    view! {
        <div class="flex justify-end mb-4">
            <Button
                variant=ButtonVariant::Primary
                on:click=move |_| set_editor.set(Some(Editor::Create))
            >
                {t!("admin.new_product").to_string()}
            </Button>
        </div>
        <InlineErrorMessage error=error.into()/>
        {move || match products.get() {
            None => view! { <LoadingSpinner/> }.into_view(),
            Some(Err(err)) => err.into_view(),
            Some(Ok(page_data)) if page_data.is_empty() => view! {
                <EmptyState title=t!("admin.products_empty").to_string()/>
            }
            .into_view(),
            Some(Ok(page_data)) => view! {
                <div class="overflow-x-auto rounded-lg border border-border bg-surface-elevated">
                    <table class="min-w-full divide-y divide-border text-sm">
                        <thead class="bg-surface-muted text-left text-fg-muted">
                            <tr>
                                <th class="px-4 py-3 font-medium">{t!("admin.col_product").to_string()}</th>
                                <th class="px-4 py-3 font-medium">{t!("admin.col_category").to_string()}</th>
                                <th class="px-4 py-3 font-medium">{t!("admin.col_price").to_string()}</th>
                                <th class="px-4 py-3 font-medium">{t!("admin.col_stock").to_string()}</th>
                                <th class="px-4 py-3"></th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            {page_data
                                .content
                                .into_iter()
                                .map(|product| {
                                    let edit_product = product.clone();
                                    let delete_product = product.clone();
                                    view! {
                                        <tr>
                                            <td class="px-4 py-3 font-medium text-fg">{product.name.clone()}</td>
                                            <td class="px-4 py-3 text-fg-muted">
                                                {product.category_label().unwrap_or("—").to_string()}
                                            </td>
                                            <td class="px-4 py-3 text-fg">{format::format_price(product.price)}</td>
                                            <td class="px-4 py-3 text-fg">{product.stock}</td>
                                            <td class="px-4 py-3 text-right space-x-3">
                                                <button
                                                    type="button"
                                                    class="text-xs font-medium text-fg hover:underline"
                                                    on:click=move |_| {
                                                        set_editor.set(Some(Editor::Edit(edit_product.clone())))
                                                    }
                                                >
                                                    {t!("common.edit").to_string()}
                                                </button>
                                                <button
                                                    type="button"
                                                    class="text-xs font-medium text-status-error-text hover:underline"
                                                    on:click=move |_| set_deleting.set(Some(delete_product.clone()))
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
        {move || editor.get().map(|editor_state| {
            let initial = match editor_state {
                Editor::Create => None,
                Editor::Edit(product) => Some(product),
            };
            view! {
                <ProductModal
                    initial=initial
                    categories=category_options
                    busy=saving
                    on_save=Callback::new(move |(id, payload)| {
                        save_action.dispatch((id, payload));
                    })
                    on_close=Callback::new(move |_| set_editor.set(None))
                />
            }
        })}
        <ConfirmDialog
            is_open=Signal::derive(move || deleting.get().is_some())
            title=t!("admin.delete_product_title").to_string()
            message=Signal::derive(move || {
                t!(
                    "admin.delete_product_message",
                    name = deleting.get().map(|p| p.name).unwrap_or_default()
                )
                .to_string()
            })
            destructive=true
            on_confirm=Callback::new(move |_| {
                if let Some(product) = deleting.get_untracked() {
                    delete_action.dispatch(product.id);
                }
            })
            on_cancel=Callback::new(move |_| set_deleting.set(None))
        />
    }
}

#[component]
fn ProductModal(
    initial: Option<ProductResponse>,
    #[prop(into)] categories: Signal<Vec<CategoryResponse>>,
    #[prop(into)] busy: Signal<bool>,
    on_save: Callback<(Option<i64>, ProductPayload)>,
    on_close: Callback<()>,
) -> impl IntoView {
    let id = initial.as_ref().map(|p| p.id);
    let initial_category = initial.as_ref().and_then(|p| p.resolved_category_id());

    let (name, set_name) = create_signal(
        initial.as_ref().map(|p| p.name.clone()).unwrap_or_default(),
    );
    let (description, set_description) = create_signal(
        initial
            .as_ref()
            .and_then(|p| p.description.clone())
            .unwrap_or_default(),
    );
    let (price_raw, set_price_raw) = create_signal(
        initial
            .as_ref()
            .map(|p| format!("{:.2}", p.price))
            .unwrap_or_default(),
    );
    let (stock_raw, set_stock_raw) = create_signal(
        initial
            .as_ref()
            .map(|p| p.stock.to_string())
            .unwrap_or_default(),
    );
    let (image, set_image) = create_signal(
        initial
            .as_ref()
            .and_then(|p| p.image.clone())
            .unwrap_or_default(),
    );
    let (category_raw, set_category_raw) = create_signal(
        initial_category.map(|c| c.to_string()).unwrap_or_default(),
    );
    let (form_error, set_form_error) = create_signal(None::<String>);

    let title = if id.is_some() {
        t!("admin.edit_product").to_string()
    } else {
        t!("admin.new_product").to_string()
    };

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let name_value = name.get_untracked().trim().to_string();
        if name_value.is_empty() {
            set_form_error.set(Some(t!("admin.product_name_required").to_string()));
            return;
        }
        let Some(price) = utils::parse_price(&price_raw.get_untracked()) else {
            set_form_error.set(Some(t!("admin.product_price_invalid").to_string()));
            return;
        };
        let Some(stock) = utils::parse_stock(&stock_raw.get_untracked()) else {
            set_form_error.set(Some(t!("admin.product_stock_invalid").to_string()));
            return;
        };
        set_form_error.set(None);
        let description_value = description.get_untracked().trim().to_string();
        let image_value = image.get_untracked().trim().to_string();
        on_save.call((
            id,
            ProductPayload {
                name: name_value,
                description: (!description_value.is_empty()).then_some(description_value),
                price,
                stock,
                category_id: utils::parse_category(&category_raw.get_untracked()),
                image: (!image_value.is_empty()).then_some(image_value),
            },
        ));
    };

    let field_class =
        "w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg";

    view! {
        <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
            <button
                type="button"
                aria-label=move || t!("common.close").to_string()
                class="absolute inset-0 bg-overlay-backdrop"
                on:click=move |_| on_close.call(())
            ></button>
            <form
                class="relative z-[71] w-full max-w-lg space-y-4 rounded-lg border border-border bg-surface-elevated p-6 shadow-xl"
                on:submit=submit
            >
                <div class="flex items-start justify-between">
                    <h2 class="text-lg font-semibold text-fg">{title}</h2>
                    <button
                        type="button"
                        aria-label=move || t!("common.close").to_string()
                        class="text-fg-muted hover:text-fg"
                        on:click=move |_| on_close.call(())
                    >
                        {"✕"}
                    </button>
                </div>

                {move || form_error.get().map(|message| view! {
                    <p class="text-sm text-status-error-text">{message}</p>
                })}

                <div>
                    <label class="block text-sm font-medium text-fg-muted mb-1" for="product-name">
                        {t!("admin.field_name").to_string()}
                    </label>
                    <input
                        id="product-name"
                        type="text"
                        class=field_class
                        prop:value=name
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </div>

                <div>
                    <label class="block text-sm font-medium text-fg-muted mb-1" for="product-description">
                        {t!("admin.field_description").to_string()}
                    </label>
                    <textarea
                        id="product-description"
                        rows=3
                        class=field_class
                        prop:value=description
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="grid grid-cols-2 gap-4">
                    <div>
                        <label class="block text-sm font-medium text-fg-muted mb-1" for="product-price">
                            {t!("admin.field_price").to_string()}
                        </label>
                        <input
                            id="product-price"
                            type="text"
                            inputmode="decimal"
                            class=field_class
                            prop:value=price_raw
                            on:input=move |ev| set_price_raw.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-fg-muted mb-1" for="product-stock">
                            {t!("admin.field_stock").to_string()}
                        </label>
                        <input
                            id="product-stock"
                            type="text"
                            inputmode="numeric"
                            class=field_class
                            prop:value=stock_raw
                            on:input=move |ev| set_stock_raw.set(event_target_value(&ev))
                        />
                    </div>
                </div>

                <div>
                    <label class="block text-sm font-medium text-fg-muted mb-1" for="product-image">
                        {t!("admin.field_image").to_string()}
                    </label>
                    <input
                        id="product-image"
                        type="text"
                        class=field_class
                        prop:value=image
                        on:input=move |ev| set_image.set(event_target_value(&ev))
                    />
                </div>

                <div>
                    <label class="block text-sm font-medium text-fg-muted mb-1" for="product-category">
                        {t!("admin.field_category").to_string()}
                    </label>
                    <select
                        id="product-category"
                        class=field_class
                        on:change=move |ev| set_category_raw.set(event_target_value(&ev))
                    >
                        <option value="" selected=initial_category.is_none()>
                            {t!("admin.no_category").to_string()}
                        </option>
                        {move || categories
                            .get()
                            .into_iter()
                            .map(|category| {
                                let selected = Some(category.id) == initial_category;
                                view! {
                                    <option value=category.id.to_string() selected=selected>
                                        {category.name}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="flex justify-end gap-2">
                    <Button variant=ButtonVariant::Ghost attr:type="button" on:click=move |_| on_close.call(())>
                        {t!("common.cancel").to_string()}
                    </Button>
                    <Button variant=ButtonVariant::Primary loading=busy attr:type="submit">
                        {t!("common.save").to_string()}
                    </Button>
                </div>
            </form>
        </div>
    }
}
