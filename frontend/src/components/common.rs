use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Danger,
    Ghost,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text shadow-sm focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-action-primary-focus",
            ButtonVariant::Danger => "bg-action-danger-bg hover:bg-action-danger-bg-hover text-action-danger-text shadow-sm",
            ButtonVariant::Ghost => "bg-surface-muted hover:bg-surface-elevated text-fg border border-border",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=move || {
                format!(
                    "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold transition-colors duration-200 disabled:opacity-50 disabled:cursor-not-allowed {} {}",
                    variant.classes(),
                    class
                )
            }
            disabled=move || disabled.get() || loading.get()
            {..attributes}
        >
            <Show when=move || loading.get()>
                <span class="mr-2 h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"></span>
            </Show>
            {children()}
        </button>
    }
}

/// Star strip for a 1..=5 rating. Values outside the scale clamp.
pub fn star_string(rating: i32) -> String {
    let filled = rating.clamp(0, 5) as usize;
    format!("{}{}", "⭐".repeat(filled), "☆".repeat(5 - filled))
}

#[component]
pub fn StarRating(#[prop(into)] rating: MaybeSignal<i32>) -> impl IntoView {
    view! {
        <span class="text-base tracking-wide" aria-label=move || format!("{}/5", rating.get().clamp(0, 5))>
            {move || star_string(rating.get())}
        </span>
    }
}

pub fn avatar_initial(username: &str) -> String {
    username
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string())
}

/// Profile image, or an initial-letter disc when the account has none.
#[component]
pub fn Avatar(
    #[prop(into)] username: String,
    #[prop(optional_no_strip, into)] image: Option<String>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let size = if class.is_empty() {
        "h-10 w-10".to_string()
    } else {
        class
    };
    match image {
        Some(src) => view! {
            <img
                class=format!("{} rounded-full object-cover", size)
                src=src
                alt=username
            />
        }
        .into_view(),
        None => {
            let initial = avatar_initial(&username);
            view! {
                <span class=format!(
                    "{} rounded-full bg-action-primary-bg text-action-primary-text inline-flex items-center justify-center font-semibold",
                    size
                )>
                    {initial}
                </span>
            }
            .into_view()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_classes_are_distinct() {
        assert!(ButtonVariant::Primary.classes().contains("bg-action-primary-bg"));
        assert!(ButtonVariant::Danger.classes().contains("bg-action-danger-bg"));
        assert!(ButtonVariant::Ghost.classes().contains("border"));
    }

    #[test]
    fn star_string_fills_up_to_rating() {
        assert_eq!(star_string(0), "☆☆☆☆☆");
        assert_eq!(star_string(3), "⭐⭐⭐☆☆");
        assert_eq!(star_string(5), "⭐⭐⭐⭐⭐");
    }

    #[test]
    fn star_string_clamps_out_of_scale_values() {
        assert_eq!(star_string(-2), "☆☆☆☆☆");
        assert_eq!(star_string(9), "⭐⭐⭐⭐⭐");
    }

    #[test]
    fn avatar_initial_uppercases_first_letter() {
        assert_eq!(avatar_initial("jane"), "J");
        assert_eq!(avatar_initial("ökkeş"), "Ö");
        assert_eq!(avatar_initial(""), "?");
    }
}
