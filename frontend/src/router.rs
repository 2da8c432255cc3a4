use leptos::*;
use leptos_router::*;

use crate::{
    components::guard::RequireAdmin,
    pages::{
        ActivationPage, AdminPage, CartPage, HomePage, LoginPage, OrderDetailPage, OrdersPage,
        PasswordResetRequestPage, PasswordResetSetPage, PaymentPage, ProductDetailPage,
        ProductsPage, SignUpPage, UserPage,
    },
    state::auth::SessionProvider,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/signup",
    "/activation/:token",
    "/password-reset/request",
    "/password-reset/set",
    "/products",
    "/products/:id",
    "/cart",
    "/orders",
    "/orders/:id",
    "/payment/:order_id",
    "/user/:id",
    "/admin",
];

/// Routes wrapped in a guard component here in the route table. The
/// payment page guards itself (anonymous visitors are redirected to the
/// login form inside `PaymentPanel`); the cart and order views stay
/// reachable while anonymous and show a sign-in prompt.
pub const GUARDED_ROUTE_PATHS: &[&str] = &["/admin"];

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    view! {
        <SessionProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/signup" view=SignUpPage/>
                    <Route path="/activation/:token" view=ActivationPage/>
                    <Route path="/password-reset/request" view=PasswordResetRequestPage/>
                    <Route path="/password-reset/set" view=PasswordResetSetPage/>
                    <Route path="/products" view=ProductsPage/>
                    <Route path="/products/:id" view=ProductDetailPage/>
                    <Route path="/cart" view=CartPage/>
                    <Route path="/orders" view=OrdersPage/>
                    <Route path="/orders/:id" view=OrderDetailPage/>
                    <Route path="/payment/:order_id" view=PaymentPage/>
                    <Route path="/user/:id" view=UserPage/>
                    <Route path="/admin" view=ProtectedAdmin/>
                    <Route path="/*any" view=HomePage/>
                </Routes>
            </Router>
        </SessionProvider>
    }
}

#[component]
fn ProtectedAdmin() -> impl IntoView {
    view! { <RequireAdmin><AdminPage/></RequireAdmin> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn route_paths_cover_the_storefront_and_back_office() {
        assert!(ROUTE_PATHS.contains(&"/products/:id"));
        assert!(ROUTE_PATHS.contains(&"/payment/:order_id"));
        assert!(ROUTE_PATHS.contains(&"/admin"));
    }

    #[test]
    fn guarded_routes_are_subset_of_all() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        for path in GUARDED_ROUTE_PATHS {
            assert!(
                all.contains(path),
                "guarded path missing from ROUTE_PATHS: {}",
                path
            );
        }
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }
}
