use crate::api::ApiError;
use leptos::*;

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">
                    {move || error.get().map(|e| e.to_string()).unwrap_or_default()}
                </div>
                {move || error.get().and_then(|e| match e {
                    ApiError::Server { validation_errors: Some(errors), .. } if !errors.is_empty() => {
                        Some(view! {
                            <ul class="list-disc list-inside text-sm">
                                {errors.iter().map(|(field, message)| {
                                    view! { <li>{format!("{}: {}", field, message)}</li> }
                                }).collect_view()}
                            </ul>
                        }.into_view())
                    }
                    _ => None,
                })}
            </div>
        </Show>
    }
}
