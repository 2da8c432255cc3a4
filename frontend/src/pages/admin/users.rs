use leptos::*;
use rust_i18n::t;

use super::utils;
use crate::api::{use_api, ApiError, CancelToken, Role, UserResponse, ADMIN_PAGE_SIZE};
use crate::components::common::Avatar;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::empty_state::EmptyState;
use crate::components::error::InlineErrorMessage;
use crate::components::layout::LoadingSpinner;
use crate::components::pagination::Pagination;
use crate::state::auth::{expire_session, use_session};

#[component]
pub fn AdminUsersTab() -> impl IntoView {
    let (session, set_session) = use_session();

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
    let users = create_local_resource(
        move || (page.get(), refresh.get()),
        move |(page, _)| {
            let api = load_api.clone();
            async move { api.list_users(page, ADMIN_PAGE_SIZE).await }
        },
    );
    create_effect(move |_| {
        if let Some(Err(err)) = users.get() {
            if err.is_unauthorized() {
                expire_session(set_session);
            }
        }
    });

    let (error, set_error) = create_signal(None::<ApiError>);
    let (deleting, set_deleting) = create_signal(None::<UserResponse>);

    let role_api = api.clone();
    let role_action = create_action(move |&(id, role): &(i64, Role)| {
        let api = role_api.clone();
        async move { api.update_user_role(id, role).await }
    });
    let delete_action = create_action(move |&id: &i64| {
        let api = api.clone();
        async move { api.delete_user(id).await }
    });

    let settle = move |result: Result<(), ApiError>| match result {
        Ok(()) => {
            set_error.set(None);
            reload();
        }
        Err(err) => {
            if err.is_unauthorized() {
                expire_session(set_session);
                return;
            }
            set_error.set(Some(err));
            reload();
        }
    };
    create_effect(move |_| {
        if let Some(result) = role_action.value().get() {
            settle(result);
        }
    });
    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            set_deleting.set(None);
            settle(result);
        }
    });

    let total_pages = Signal::derive(move || {
        users
            .get()
            .and_then(|r| r.ok())
            .map(|p| p.total_pages)
            .unwrap_or(0)
    });

    view! {
        <InlineErrorMessage error=error.into()/>
        {move || match users.get() {
            None => view! { <LoadingSpinner/> }.into_view(),
            Some(Err(err)) => err.into_view(),
            Some(Ok(page_data)) if page_data.is_empty() => view! {
                <EmptyState title=t!("admin.users_empty").to_string()/>
            }
            .into_view(),
            Some(Ok(page_data)) => {
                let session_id = session.get_untracked().id;
                view! {
                    <div class="overflow-x-auto rounded-lg border border-border bg-surface-elevated">
                        <table class="min-w-full divide-y divide-border text-sm">
                            <thead class="bg-surface-muted text-left text-fg-muted">
                                <tr>
                                    <th class="px-4 py-3 font-medium">{t!("admin.col_user").to_string()}</th>
                                    <th class="px-4 py-3 font-medium">{t!("admin.col_email").to_string()}</th>
                                    <th class="px-4 py-3 font-medium">{t!("admin.col_role").to_string()}</th>
                                    <th class="px-4 py-3"></th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-border">
                                {page_data
                                    .content
                                    .into_iter()
                                    .map(|user| {
                                        let id = user.id;
                                        let current_role = user.role;
                                        // Own row stays read-only.
                                        let own = utils::is_own_account(session_id, id);
                                        let delete_user = user.clone();
                                        view! {
                                            <tr>
                                                <td class="px-4 py-3">
                                                    <div class="flex items-center gap-3">
                                                        <Avatar
                                                            username=user.username.clone()
                                                            image=user.image.clone()
                                                            class="h-8 w-8 text-sm"
                                                        />
                                                        <span class="font-medium text-fg">{user.username.clone()}</span>
                                                    </div>
                                                </td>
                                                <td class="px-4 py-3 text-fg-muted">
                                                    {user.email.clone().unwrap_or_default()}
                                                </td>
                                                <td class="px-4 py-3">
                                                    <select
                                                        class="rounded-md border border-border bg-surface px-2 py-1 text-xs font-semibold text-fg disabled:opacity-50"
                                                        disabled=own
                                                        on:change=move |ev| {
                                                            let value = event_target_value(&ev);
                                                            let role = if value == Role::Admin.as_str() {
                                                                Role::Admin
                                                            } else {
                                                                Role::User
                                                            };
                                                            if role != current_role {
                                                                role_action.dispatch((id, role));
                                                            }
                                                        }
                                                    >
                                                        <option
                                                            value=Role::User.as_str()
                                                            selected=current_role == Role::User
                                                        >
                                                            {t!("admin.role_user").to_string()}
                                                        </option>
                                                        <option
                                                            value=Role::Admin.as_str()
                                                            selected=current_role == Role::Admin
                                                        >
                                                            {t!("admin.role_admin").to_string()}
                                                        </option>
                                                    </select>
                                                </td>
                                                <td class="px-4 py-3 text-right">
                                                    <button
                                                        type="button"
                                                        class="text-xs font-medium text-status-error-text hover:underline disabled:opacity-50"
                                                        disabled=own
                                                        on:click=move |_| set_deleting.set(Some(delete_user.clone()))
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
                .into_view()
            }
        }}
        <Pagination
            page=page
            total_pages=total_pages
            on_change=Callback::new(move |next| set_page.set(next))
        />
        <ConfirmDialog
            is_open=Signal::derive(move || deleting.get().is_some())
            title=t!("admin.delete_user_title").to_string()
            message=Signal::derive(move || {
                t!(
                    "admin.delete_user_message",
                    name = deleting.get().map(|u| u.username).unwrap_or_default()
                )
                .to_string()
            })
            destructive=true
            on_confirm=Callback::new(move |_| {
                if let Some(user) = deleting.get_untracked() {
                    delete_action.dispatch(user.id);
                }
            })
            on_cancel=Callback::new(move |_| set_deleting.set(None))
        />
    }
}
