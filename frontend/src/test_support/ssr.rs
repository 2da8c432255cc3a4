use leptos::*;

use crate::api::Session;
use crate::test_support::helpers::provide_session;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Renders with a session context installed first, the usual setup for
/// navigation and guard markup tests.
pub fn render_with_session<F, N>(session: Session, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| {
        provide_session(session);
        view().into_view().render_to_string().to_string()
    });
    leptos_reactive::suppress_resource_load(false);
    html
}
