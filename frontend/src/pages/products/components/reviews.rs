use leptos::*;
use rust_i18n::t;

use crate::api::{
    use_api, ApiError, CancelToken, ReviewPayload, ReviewResponse, Session, REVIEW_PAGE_SIZE,
};
use crate::components::common::{Button, ButtonVariant, StarRating};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::empty_state::EmptyState;
use crate::components::error::InlineErrorMessage;
use crate::components::layout::LoadingSpinner;
use crate::components::pagination::Pagination;
use crate::state::auth::use_session;
use crate::utils::format;

/// Only the author may edit or delete a review; everyone may read.
pub fn can_modify(session: &Session, review: &ReviewResponse) -> bool {
    session.is_authenticated() && review.user_id == Some(session.id)
}

/// Rating select values, highest first the way the form offers them.
pub const RATING_CHOICES: [i32; 5] = [5, 4, 3, 2, 1];

#[component]
pub fn ReviewsSection(product_id: i64, on_changed: Callback<()>) -> impl IntoView {
    let (session, _) = use_session();

    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        on_cleanup(move || cancel.cancel());
    }
    let api = use_api().with_cancel(cancel);

    let (page, set_page) = create_signal(0u32);
    let (refresh, set_refresh) = create_signal(0u32);

    let list_api = api.clone();
    let reviews = create_local_resource(
        move || (page.get(), refresh.get()),
        move |(page, _)| {
            let api = list_api.clone();
            async move { api.list_reviews(product_id, page, REVIEW_PAGE_SIZE).await }
        },
    );

    // Form state doubles for create and edit; `editing` carries the id
    // of the review being rewritten.
    let (editing, set_editing) = create_signal(None::<i64>);
    let (rating, set_rating) = create_signal(5i32);
    let (comment, set_comment) = create_signal(String::new());
    let (form_error, set_form_error) = create_signal(None::<ApiError>);

    let reset_form = move || {
        set_editing.set(None);
        set_rating.set(5);
        set_comment.set(String::new());
    };

    let save_api = api.clone();
    let save_action = create_action(
        move |(review_id, payload): &(Option<i64>, ReviewPayload)| {
            let api = save_api.clone();
            let review_id = *review_id;
            let payload = payload.clone();
            async move {
                match review_id {
                    Some(id) => api.update_review(id, &payload).await,
                    None => api.create_review(product_id, &payload).await,
                }
            }
        },
    );
    let saving = save_action.pending();
    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(()) => {
                    set_form_error.set(None);
                    reset_form();
                    set_refresh.update(|tick| *tick += 1);
                    on_changed.call(());
                }
                Err(err) => set_form_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let payload = ReviewPayload {
            rating: rating.get_untracked().clamp(1, 5),
            comment: comment.get_untracked().trim().to_string(),
        };
        save_action.dispatch((editing.get_untracked(), payload));
    };

    let (pending_delete, set_pending_delete) = create_signal(None::<i64>);
    let delete_api = api.clone();
    let delete_action = create_action(move |&id: &i64| {
        let api = delete_api.clone();
        async move { api.delete_review(id).await }
    });
    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            if result.is_ok() {
                set_refresh.update(|tick| *tick += 1);
                on_changed.call(());
            }
        }
    });
    let confirm_delete = Callback::new(move |_| {
        if let Some(id) = pending_delete.get_untracked() {
            delete_action.dispatch(id);
        }
        set_pending_delete.set(None);
    });

    let start_edit = move |review: &ReviewResponse| {
        set_editing.set(Some(review.id));
        set_rating.set(review.rating.clamp(1, 5));
        set_comment.set(review.comment.clone().unwrap_or_default());
    };

    let total_pages = Signal::derive(move || {
        reviews
            .get()
            .and_then(|r| r.ok())
            .map(|p| p.total_pages)
            .unwrap_or(0)
    });

    view! {
        <section class="mt-10 space-y-4">
            <h2 class="text-xl font-semibold text-fg">
                {move || {
                    let count = reviews
                        .get()
                        .and_then(|r| r.ok())
                        .and_then(|p| p.total_elements)
                        .unwrap_or(0);
                    t!("reviews.heading", count = count).to_string()
                }}
            </h2>

            <Show when=move || session.get().is_authenticated()>
                <form
                    class="rounded-lg border border-border bg-surface-elevated p-4 space-y-3"
                    on:submit=on_submit
                >
                    <div class="flex items-center gap-3">
                        <label class="text-sm text-fg-muted" for="review-rating">
                            {t!("reviews.rating").to_string()}
                        </label>
                        <select
                            id="review-rating"
                            class="rounded-md border border-border bg-surface px-2 py-1 text-sm"
                            on:change=move |ev| {
                                set_rating.set(event_target_value(&ev).parse().unwrap_or(5));
                            }
                        >
                            {RATING_CHOICES
                                .into_iter()
                                .map(|value| view! {
                                    <option value=value.to_string() selected=move || rating.get() == value>
                                        {value.to_string()}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                        <StarRating rating=rating/>
                    </div>
                    <textarea
                        class="w-full rounded-md border border-border bg-surface px-3 py-2 text-sm"
                        rows=3
                        placeholder=t!("reviews.comment_placeholder").to_string()
                        prop:value=comment
                        on:input=move |ev| set_comment.set(event_target_value(&ev))
                    ></textarea>
                    <InlineErrorMessage error=form_error.into()/>
                    <div class="flex gap-2">
                        <Button variant=ButtonVariant::Primary loading=saving attr:type="submit">
                            {move || if editing.get().is_some() {
                                t!("reviews.update").to_string()
                            } else {
                                t!("reviews.submit").to_string()
                            }}
                        </Button>
                        <Show when=move || editing.get().is_some()>
                            <Button
                                variant=ButtonVariant::Ghost
                                attr:type="button"
                                on:click=move |_| reset_form()
                            >
                                {t!("common.cancel").to_string()}
                            </Button>
                        </Show>
                    </div>
                </form>
            </Show>

            {move || match reviews.get() {
                None => view! { <LoadingSpinner/> }.into_view(),
                Some(Err(err)) => err.into_view(),
                Some(Ok(page_data)) if page_data.is_empty() => view! {
                    <EmptyState title=t!("reviews.empty").to_string()/>
                }
                .into_view(),
                Some(Ok(page_data)) => page_data
                    .content
                    .into_iter()
                    .map(|review| {
                        let snapshot = session.get();
                        let owned = can_modify(&snapshot, &review);
                        let review_for_edit = review.clone();
                        let review_id = review.id;
                        view! {
                            <article class="rounded-lg border border-border bg-surface-elevated p-4 space-y-1">
                                <div class="flex items-center justify-between">
                                    <div class="flex items-center gap-2">
                                        <StarRating rating=review.rating/>
                                        <span class="text-sm font-medium text-fg">
                                            {review.user_name.clone().unwrap_or_else(|| t!("reviews.anonymous").to_string())}
                                        </span>
                                    </div>
                                    <span class="text-xs text-fg-muted">
                                        {review.created_date.as_deref().map(format::format_date).unwrap_or_default()}
                                    </span>
                                </div>
                                {review.comment.clone().map(|text| view! {
                                    <p class="text-sm text-fg-muted">{text}</p>
                                })}
                                <Show when=move || owned>
                                    <div class="flex gap-3 pt-1">
                                        <button
                                            type="button"
                                            class="text-xs text-fg-muted hover:text-fg underline"
                                            on:click={
                                                let review = review_for_edit.clone();
                                                move |_| start_edit(&review)
                                            }
                                        >
                                            {t!("common.edit").to_string()}
                                        </button>
                                        <button
                                            type="button"
                                            class="text-xs text-status-error-text hover:underline"
                                            on:click=move |_| set_pending_delete.set(Some(review_id))
                                        >
                                            {t!("common.delete").to_string()}
                                        </button>
                                    </div>
                                </Show>
                            </article>
                        }
                    })
                    .collect_view(),
            }}

            <Pagination
                page=page
                total_pages=total_pages
                on_change=Callback::new(move |next| set_page.set(next))
            />

            <ConfirmDialog
                is_open=Signal::derive(move || pending_delete.get().is_some())
                title=t!("reviews.delete_title").to_string()
                message=t!("reviews.delete_message").to_string()
                on_confirm=confirm_delete
                on_cancel=Callback::new(move |_| set_pending_delete.set(None))
                destructive=true
            />
        </section>
    }
}
