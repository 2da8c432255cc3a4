use crate::{api::Session, state::auth::use_session, utils::browser};
use leptos::*;

/// Renders its children only for an authenticated session; anonymous
/// visitors are sent to the login form. A hydrated credential riding on
/// the anonymous placeholder does not count as authenticated.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_session();
    let authenticated = create_memo(move |_| session.get().is_authenticated());
    create_effect(move |_| {
        if !session.get().is_authenticated() {
            browser::redirect_to("/login");
        }
    });
    view! {
        <Show when=move || authenticated.get() fallback=|| ()>
            {children()}
        </Show>
    }
}

/// Admin-only gate for the back-office. Anonymous visitors go to the
/// login form, signed-in customers back to the storefront.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_session();
    let admin = create_memo(move |_| session.get().is_admin());
    create_effect(move |_| {
        if let Some(target) = admin_redirect_target(&session.get()) {
            browser::redirect_to(target);
        }
    });
    view! {
        <Show when=move || admin.get() fallback=|| ()>
            {children()}
        </Show>
    }
}

fn admin_redirect_target(session: &Session) -> Option<&'static str> {
    if !session.is_authenticated() {
        Some("/login")
    } else if !session.is_admin() {
        Some("/")
    } else {
        None
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::{RequireAdmin, RequireAuth};
    use crate::api::Session;
    use crate::test_support::helpers::{admin_session, customer_session};
    use crate::test_support::ssr::render_with_session;
    use leptos::*;

    #[test]
    fn require_auth_renders_children_when_authenticated() {
        let html = render_with_session(customer_session(), || {
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn require_auth_hides_children_for_anonymous() {
        let html = render_with_session(Session::anonymous(), || {
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn require_admin_renders_children_for_admins() {
        let html = render_with_session(admin_session(), || {
            view! {
                <RequireAdmin>
                    {|| view! { <div>"back-office"</div> }}
                </RequireAdmin>
            }
        });
        assert!(html.contains("back-office"));
    }

    #[test]
    fn require_admin_hides_children_for_customers() {
        let html = render_with_session(customer_session(), || {
            view! {
                <RequireAdmin>
                    {|| view! { <div>"back-office"</div> }}
                </RequireAdmin>
            }
        });
        assert!(!html.contains("back-office"));
    }
}
