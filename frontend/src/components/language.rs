use leptos::*;

use crate::state::locale;
use crate::utils::browser;

/// Locale dropdown in the navigation bar. Changing it persists the
/// choice and reloads the document so every view re-renders translated.
#[component]
pub fn LanguageSelector() -> impl IntoView {
    let current = locale::current();

    let on_change = move |ev| {
        locale::change(&event_target_value(&ev));
        browser::reload();
    };

    view! {
        <select
            class="rounded-md border border-border bg-surface-elevated px-2 py-1 text-sm text-fg"
            aria-label="language"
            on:change=on_change
        >
            {locale::SUPPORTED
                .iter()
                .map(|(code, label)| {
                    view! {
                        <option value=*code selected=*code == current.as_str()>
                            {*label}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
