use leptos::*;

use crate::api::{credentials, ApiClient, ApiError, LoginRequest, Session};
use crate::utils::browser;

pub type SessionContext = (ReadSignal<Session>, WriteSignal<Session>);

/// The only two ways the session ever changes. Every other component
/// holds a read handle; mutation goes through [`dispatch`].
#[derive(Debug, Clone, PartialEq)]
pub enum AuthAction {
    LoginSuccess(Session),
    LogoutSuccess,
}

/// Applies an action to the container and keeps the persisted credential
/// in step: a login payload's token is saved (or the store cleared when
/// the payload carries none), logout always clears.
pub fn dispatch(set_session: WriteSignal<Session>, action: AuthAction) {
    match action {
        AuthAction::LoginSuccess(session) => {
            match &session.token {
                Some(credential) => credentials::save(credential),
                None => credentials::clear(),
            }
            set_session.set(session);
        }
        AuthAction::LogoutSuccess => {
            credentials::clear();
            set_session.set(Session::anonymous());
        }
    }
}

/// Startup snapshot. A persisted credential rides on the anonymous
/// placeholder; identity fields stay empty until a real login answers.
/// The token is never validated here, a 401 on first use expires it.
fn hydrate_session() -> Session {
    match credentials::load() {
        Some(credential) => Session {
            token: Some(credential),
            ..Session::anonymous()
        },
        None => Session::anonymous(),
    }
}

fn create_session_context() -> SessionContext {
    create_signal(hydrate_session())
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let ctx = create_session_context();
    provide_context::<SessionContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| create_signal(Session::anonymous()))
}

pub async fn login_request(
    api: &ApiClient,
    request: LoginRequest,
    set_session: WriteSignal<Session>,
) -> Result<Session, ApiError> {
    let session = api.login(&request).await?;
    dispatch(set_session, AuthAction::LoginSuccess(session.clone()));
    Ok(session)
}

pub fn use_login_action() -> Action<LoginRequest, Result<Session, ApiError>> {
    let (_session, set_session) = use_session();

    let cancel = crate::api::CancelToken::new();
    {
        let cancel = cancel.clone();
        on_cleanup(move || cancel.cancel());
    }
    let api = crate::api::use_api().with_cancel(cancel);

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let api = api.clone();
        async move { login_request(&api, payload, set_session).await }
    })
}

/// What a view does with `ApiError::Unauthorized`: drop the session and
/// send the user to the login form.
pub fn expire_session(set_session: WriteSignal<Session>) {
    dispatch(set_session, AuthAction::LogoutSuccess);
    browser::redirect_to("/login");
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::credentials::Credential;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn login_request_dispatches_and_later_requests_carry_the_token() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/v1/auth");
            then.status(200).json_body(json!({
                "id": 7,
                "username": "jane",
                "role": "USER",
                "image": null,
                "token": { "prefix": "Bearer", "token": "abc" }
            }));
        });
        let authorized = server.mock(|when, then| {
            when.method(GET)
                .path("/api/v1/cart")
                .header("authorization", "Bearer abc");
            then.status(200).json_body(json!({ "items": [] }));
        });

        let runtime = create_runtime();
        let (session, set_session) = create_signal(Session::anonymous());
        let api = ApiClient::new_with_base_url(server.base_url());

        let logged_in = login_request(
            &api,
            LoginRequest {
                email: "jane@example.com".into(),
                password: "secret".into(),
            },
            set_session,
        )
        .await
        .unwrap();
        assert_eq!(logged_in.id, 7);
        assert!(session.get_untracked().is_authenticated());

        api.get_cart().await.unwrap();
        authorized.assert_async().await;

        // Logging out clears the store, so the authorized mock stops
        // matching and the follow-up request fails instead.
        dispatch(set_session, AuthAction::LogoutSuccess);
        assert!(api.get_cart().await.is_err());
        authorized.assert_hits_async(1).await;

        runtime.dispose();
    }

    #[tokio::test]
    async fn hydrated_credential_is_sent_before_any_login() {
        let server = MockServer::start_async().await;
        let authorized = server.mock(|when, then| {
            when.method(GET)
                .path("/api/v1/cart")
                .header("authorization", "Bearer xyz");
            then.status(200).json_body(json!({ "items": [] }));
        });

        credentials::save(&Credential::new("Bearer", "xyz"));
        let runtime = create_runtime();
        let (session, _set_session) = create_session_context();
        let snapshot = session.get_untracked();
        assert!(!snapshot.is_authenticated());
        assert!(snapshot.token.is_some());

        let api = ApiClient::new_with_base_url(server.base_url());
        api.get_cart().await.unwrap();
        authorized.assert_async().await;

        credentials::clear();
        runtime.dispose();
    }
}
