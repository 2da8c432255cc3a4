use leptos::*;
use rust_i18n::t;

use crate::api::{use_api, ApiError, CancelToken, CategoryPayload, CategoryResponse};
use crate::components::common::{Button, ButtonVariant};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::empty_state::EmptyState;
use crate::components::error::InlineErrorMessage;
use crate::components::layout::LoadingSpinner;
use crate::state::auth::{expire_session, use_session};

#[derive(Clone, PartialEq)]
enum Editor {
    Create,
    Edit(CategoryResponse),
}

#[component]
pub fn AdminCategoriesTab() -> impl IntoView {
    let (_session, set_session) = use_session();

    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        on_cleanup(move || cancel.cancel());
    }
    let api = use_api().with_cancel(cancel);

    let (refresh, set_refresh) = create_signal(0u32);
    let reload = move || set_refresh.update(|tick| *tick += 1);

    let load_api = api.clone();
    let categories = create_local_resource(
        move || refresh.get(),
        move |_| {
            let api = load_api.clone();
            async move { api.list_categories(0, 100).await }
        },
    );
    create_effect(move |_| {
        if let Some(Err(err)) = categories.get() {
            if err.is_unauthorized() {
                expire_session(set_session);
            }
        }
    });

    let (editor, set_editor) = create_signal(None::<Editor>);
    let (deleting, set_deleting) = create_signal(None::<CategoryResponse>);
    let (error, set_error) = create_signal(None::<ApiError>);

    let save_api = api.clone();
    let save_action = create_action(
        move |(id, payload): &(Option<i64>, CategoryPayload)| {
            let api = save_api.clone();
            let id = *id;
            let payload = payload.clone();
            async move {
                match id {
                    Some(id) => api.update_category(id, &payload).await,
                    None => api.create_category(&payload).await,
                }
            }
        },
    );
    let saving = save_action.pending();
    let delete_action = create_action(move |&id: &i64| {
        let api = api.clone();
        async move { api.delete_category(id).await }
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

    view! {
        <div class="flex justify-end mb-4">
            <Button
                variant=ButtonVariant::Primary
                on:click=move |_| set_editor.set(Some(Editor::Create))
            >
                {t!("admin.new_category").to_string()}
            </Button>
        </div>
        <InlineErrorMessage error=error.into()/>
        {move || match categories.get() {
            None => view! { <LoadingSpinner/> }.into_view(),
            Some(Err(err)) => err.into_view(),
            Some(Ok(items)) if items.is_empty() => view! {
                <EmptyState title=t!("admin.categories_empty").to_string()/>
            }
            .into_view(),
            Some(Ok(items)) => view! {
                <div class="rounded-lg border border-border bg-surface-elevated divide-y divide-border">
                    {items
                        .into_iter()
                        .map(|category| {
                            let edit_category = category.clone();
                            let delete_category = category.clone();
                            view! {
                                <div class="flex items-center justify-between gap-4 p-4">
                                    <div>
                                        <p class="font-medium text-fg">{category.name.clone()}</p>
                                        {category.description.clone().map(|description| view! {
                                            <p class="text-sm text-fg-muted">{description}</p>
                                        })}
                                    </div>
                                    <div class="flex gap-3">
                                        <button
                                            type="button"
                                            class="text-xs font-medium text-fg hover:underline"
                                            on:click=move |_| {
                                                set_editor.set(Some(Editor::Edit(edit_category.clone())))
                                            }
                                        >
                                            {t!("common.edit").to_string()}
                                        </button>
                                        <button
                                            type="button"
                                            class="text-xs font-medium text-status-error-text hover:underline"
                                            on:click=move |_| set_deleting.set(Some(delete_category.clone()))
                                        >
                                            {t!("common.delete").to_string()}
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            }
            .into_view(),
        }}
        {move || editor.get().map(|editor_state| {
            let initial = match editor_state {
                Editor::Create => None,
                Editor::Edit(category) => Some(category),
            };
            view! {
                <CategoryModal
                    initial=initial
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
            title=t!("admin.delete_category_title").to_string()
            message=Signal::derive(move || {
                t!(
                    "admin.delete_category_message",
                    name = deleting.get().map(|c| c.name).unwrap_or_default()
                )
                .to_string()
            })
            destructive=true
            on_confirm=Callback::new(move |_| {
                if let Some(category) = deleting.get_untracked() {
                    delete_action.dispatch(category.id);
                }
            })
            on_cancel=Callback::new(move |_| set_deleting.set(None))
        />
    }
}

#[component]
fn CategoryModal(
    initial: Option<CategoryResponse>,
    #[prop(into)] busy: Signal<bool>,
    on_save: Callback<(Option<i64>, CategoryPayload)>,
    on_close: Callback<()>,
) -> impl IntoView {
    let id = initial.as_ref().map(|c| c.id);

    let (name, set_name) = create_signal(
        initial.as_ref().map(|c| c.name.clone()).unwrap_or_default(),
    );
    let (description, set_description) = create_signal(
        initial
            .as_ref()
            .and_then(|c| c.description.clone())
            .unwrap_or_default(),
    );
    let (form_error, set_form_error) = create_signal(None::<String>);

    let title = if id.is_some() {
        t!("admin.edit_category").to_string()
    } else {
        t!("admin.new_category").to_string()
    };

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let name_value = name.get_untracked().trim().to_string();
        if name_value.is_empty() {
            set_form_error.set(Some(t!("admin.category_name_required").to_string()));
            return;
        }
        set_form_error.set(None);
        let description_value = description.get_untracked().trim().to_string();
        on_save.call((
            id,
            CategoryPayload {
                name: name_value,
                description: (!description_value.is_empty()).then_some(description_value),
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
                class="relative z-[71] w-full max-w-md space-y-4 rounded-lg border border-border bg-surface-elevated p-6 shadow-xl"
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
                    <label class="block text-sm font-medium text-fg-muted mb-1" for="category-name">
                        {t!("admin.field_name").to_string()}
                    </label>
                    <input
                        id="category-name"
                        type="text"
                        class=field_class
                        prop:value=name
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </div>

                <div>
                    <label class="block text-sm font-medium text-fg-muted mb-1" for="category-description">
                        {t!("admin.field_description").to_string()}
                    </label>
                    <textarea
                        id="category-description"
                        rows=3
                        class=field_class
                        prop:value=description
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
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

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::Session;
    use crate::test_support::ssr::render_with_session;

    #[test]
    fn create_modal_uses_the_new_category_heading() {
        let html = render_with_session(Session::anonymous(), || {
            view! {
                <CategoryModal
                    initial=None
                    busy=Signal::derive(|| false)
                    on_save=Callback::new(|_| {})
                    on_close=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("New category"));
        assert!(html.contains("id=\"category-name\""));
        assert!(html.contains("id=\"category-description\""));
    }
}
