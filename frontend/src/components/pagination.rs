use leptos::*;
use rust_i18n::t;

pub fn can_go_previous(page: u32) -> bool {
    page > 0
}

pub fn can_go_next(page: u32, total_pages: u32) -> bool {
    page + 1 < total_pages
}

/// Human-facing page counter. Pages are zero-based internally and shown
/// one-based; an empty listing still reads "1 of 1".
pub fn page_label(page: u32, total_pages: u32) -> String {
    t!(
        "pagination.page_of",
        current = page + 1,
        total = total_pages.max(1)
    )
    .to_string()
}

/// Previous / counter / next strip under every paged table and grid.
/// Hidden entirely when there is a single page.
#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    on_change: Callback<u32>,
) -> impl IntoView {
    let go_previous = move |_| {
        let current = page.get_untracked();
        if can_go_previous(current) {
            on_change.call(current - 1);
        }
    };
    let go_next = move |_| {
        let current = page.get_untracked();
        if can_go_next(current, total_pages.get_untracked()) {
            on_change.call(current + 1);
        }
    };

    view! {
        <Show when={move || total_pages.get() > 1}>
            <div class="flex items-center justify-center gap-4 mt-6">
                <button
                    type="button"
                    class="px-3 py-1 rounded-md text-sm font-medium bg-surface-muted text-fg hover:bg-surface-elevated disabled:opacity-50 disabled:cursor-not-allowed"
                    disabled=move || !can_go_previous(page.get())
                    on:click=go_previous
                >
                    {move || t!("pagination.previous").to_string()}
                </button>
                <span class="text-sm text-fg-muted">
                    {move || page_label(page.get(), total_pages.get())}
                </span>
                <button
                    type="button"
                    class="px-3 py-1 rounded-md text-sm font-medium bg-surface-muted text-fg hover:bg-surface-elevated disabled:opacity-50 disabled:cursor-not-allowed"
                    disabled=move || !can_go_next(page.get(), total_pages.get())
                    on:click=go_next
                >
                    {move || t!("pagination.next").to_string()}
                </button>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_is_blocked_on_first_page() {
        assert!(!can_go_previous(0));
        assert!(can_go_previous(1));
    }

    #[test]
    fn next_is_blocked_on_last_page() {
        assert!(can_go_next(0, 3));
        assert!(can_go_next(1, 3));
        assert!(!can_go_next(2, 3));
        assert!(!can_go_next(0, 0));
        assert!(!can_go_next(0, 1));
    }

    #[test]
    fn page_label_is_one_based_and_never_zero_total() {
        assert_eq!(page_label(0, 3), "Page 1 of 3");
        assert_eq!(page_label(2, 3), "Page 3 of 3");
        assert_eq!(page_label(0, 0), "Page 1 of 1");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn pagination_renders_counter_between_controls() {
        let html = render_to_string(move || {
            view! {
                <Pagination
                    page=Signal::derive(|| 1u32)
                    total_pages=Signal::derive(|| 4u32)
                    on_change=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Page 2 of 4"));
    }

    #[test]
    fn pagination_hidden_for_single_page() {
        let html = render_to_string(move || {
            view! {
                <Pagination
                    page=Signal::derive(|| 0u32)
                    total_pages=Signal::derive(|| 1u32)
                    on_change=Callback::new(|_| {})
                />
            }
        });
        assert!(!html.contains("Page 1 of 1"));
    }
}
