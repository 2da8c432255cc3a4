use leptos::*;
use leptos_router::use_params_map;
use rust_i18n::t;

use super::repository::{PaymentContext, PaymentRepository};
use crate::api::{use_api, ApiError, CancelToken, PaymentMethod, PaymentResponse};
use crate::components::common::{Button, ButtonVariant};
use crate::components::empty_state::EmptyState;
use crate::components::error::InlineErrorMessage;
use crate::components::guard::RequireAuth;
use crate::components::layout::{Layout, LoadingSpinner};
use crate::pages::orders::utils::status_label;
use crate::pages::products::utils::parse_id;
use crate::state::auth::{expire_session, use_session};
use crate::utils::{browser, format};

/// Anonymous visitors are sent straight to the login form; paying needs
/// an account, so there is nothing useful to show them here.
#[component]
pub fn PaymentPanel() -> impl IntoView {
    view! {
        <Layout>
            <h1 class="text-2xl font-bold text-fg mb-6">{t!("payment.title").to_string()}</h1>
            <RequireAuth>
                <PaymentFlow/>
            </RequireAuth>
        </Layout>
    }
}

#[component]
fn PaymentFlow() -> impl IntoView {
    let (_session, set_session) = use_session();

    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        on_cleanup(move || cancel.cancel());
    }
    let repo = PaymentRepository::new(use_api().with_cancel(cancel));

    let params = use_params_map();
    let order_id = create_memo(move |_| params.with(|p| parse_id(p.get("order_id"))));

    let load_repo = repo.clone();
    let context = create_local_resource(
        move || order_id.get(),
        move |id| {
            let repo = load_repo.clone();
            async move {
                match id {
                    Some(id) => repo.load(id).await,
                    None => Err(ApiError::server(404, "Order not found")),
                }
            }
        },
    );
    create_effect(move |_| {
        if let Some(Err(err)) = context.get() {
            if err.is_unauthorized() {
                expire_session(set_session);
            }
        }
    });

    let (error, set_error) = create_signal(None::<ApiError>);
    let pay_action = create_action(
        move |&(order_id, method, ref description): &(i64, PaymentMethod, String)| {
            let repo = repo.clone();
            let description = description.clone();
            async move { repo.pay(order_id, method, Some(&description)).await }
        },
    );
    let paying = pay_action.pending();
    create_effect(move |_| {
        if let Some(result) = pay_action.value().get() {
            match result {
                Ok(payment) => {
                    let target = payment
                        .order_id
                        .or_else(|| order_id.get_untracked())
                        .map(|id| format!("/orders/{}", id))
                        .unwrap_or_else(|| "/orders".to_string());
                    browser::redirect_to(&target);
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
        <InlineErrorMessage error=error.into()/>
        {move || match context.get() {
            None => view! { <LoadingSpinner/> }.into_view(),
            Some(Err(err)) => err.into_view(),
            Some(Ok(PaymentContext { order, payment: Some(payment) })) if payment.is_completed() => {
                view! { <AlreadyPaidNotice order_id=order.id payment=payment/> }.into_view()
            }
            Some(Ok(PaymentContext { order, .. })) if order.is_payable() => {
                let id = order.id;
                view! {
                    <PaymentForm
                        amount=order.total_amount
                        busy=paying
                        on_submit=Callback::new(move |(method, description)| {
                            pay_action.dispatch((id, method, description));
                        })
                    />
                }
                .into_view()
            }
            Some(Ok(PaymentContext { order, .. })) => view! {
                <EmptyState
                    title=t!("payment.not_payable").to_string()
                    description=t!(
                        "payment.not_payable_hint",
                        status = status_label(order.status)
                    )
                    .to_string()
                />
            }
            .into_view(),
        }}
    }
}

#[component]
fn AlreadyPaidNotice(order_id: i64, payment: PaymentResponse) -> impl IntoView {
    let order_href = format!("/orders/{}", order_id);
    view! {
        <div class="rounded-lg border border-status-success-border bg-status-success-bg p-6 space-y-2">
            <h2 class="text-lg font-semibold text-status-success-text">
                {t!("payment.already_paid").to_string()}
            </h2>
            <p class="text-sm text-status-success-text">
                {format::format_price(payment.amount)}
            </p>
            {payment.transaction_id.clone().map(|txn| view! {
                <p class="text-sm text-status-success-text">
                    {t!("payment.transaction", id = txn).to_string()}
                </p>
            })}
            <a class="inline-block text-sm font-medium text-fg hover:underline" href=order_href>
                {t!("payment.back_to_order").to_string()}
            </a>
        </div>
    }
}

#[component]
fn PaymentForm(
    amount: f64,
    #[prop(into)] busy: Signal<bool>,
    on_submit: Callback<(PaymentMethod, String)>,
) -> impl IntoView {
    let (method, set_method) = create_signal(PaymentMethod::CreditCard);
    let (description, set_description) = create_signal(String::new());

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        on_submit.call((method.get_untracked(), description.get_untracked()));
    };

    view! {
        <form
            class="max-w-md space-y-4 rounded-lg border border-border bg-surface-elevated p-6"
            on:submit=submit
        >
            <p class="text-lg font-semibold text-fg">
                {t!("payment.amount_due").to_string()}
                {": "}
                {format::format_price(amount)}
            </p>

            <div>
                <label class="block text-sm font-medium text-fg-muted mb-1" for="payment-method">
                    {t!("payment.method").to_string()}
                </label>
                <select
                    id="payment-method"
                    class="w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                    on:change=move |ev| {
                        if let Some(method) = PaymentMethod::from_str(&event_target_value(&ev)) {
                            set_method.set(method);
                        }
                    }
                >
                    {PaymentMethod::ALL
                        .into_iter()
                        .map(|option| view! {
                            <option
                                value=option.as_str()
                                selected=move || method.get() == option
                            >
                                {option.label()}
                            </option>
                        })
                        .collect_view()}
                </select>
            </div>

            <div>
                <label class="block text-sm font-medium text-fg-muted mb-1" for="payment-description">
                    {t!("payment.description").to_string()}
                </label>
                <textarea
                    id="payment-description"
                    rows=2
                    class="w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                    prop:value=description
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
            </div>

            <Button variant=ButtonVariant::Primary loading=busy attr:type="submit">
                {t!("payment.submit").to_string()}
            </Button>
        </form>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{PaymentStatus, Session};
    use crate::test_support::ssr::render_with_session;

    // The guard redirects anonymous visitors to the login form; nothing
    // of the flow itself may render for them.
    #[test]
    fn anonymous_visitors_see_no_payment_flow() {
        let html = render_with_session(Session::anonymous(), || view! { <PaymentPanel/> });
        assert!(html.contains("Payment"));
        assert!(!html.contains("payment-method"));
        assert!(!html.contains("Sign in to pay for your order"));
    }

    #[test]
    fn payment_form_lists_every_method() {
        let html = render_with_session(Session::anonymous(), || {
            view! {
                <PaymentForm
                    amount=30.0
                    busy=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("$30.00"));
        for method in PaymentMethod::ALL {
            assert!(html.contains(method.label()));
        }
    }

    #[test]
    fn completed_payment_shows_the_transaction_id() {
        let payment = PaymentResponse {
            id: 77,
            order_id: Some(5),
            amount: 30.0,
            status: PaymentStatus::Completed,
            payment_method: Some(PaymentMethod::Paypal),
            transaction_id: Some("TXN-123".into()),
            description: None,
            created_date: None,
        };
        let html = render_with_session(Session::anonymous(), move || {
            view! { <AlreadyPaidNotice order_id=5 payment=payment/> }
        });
        assert!(html.contains("TXN-123"));
        assert!(html.contains("/orders/5"));
    }
}
