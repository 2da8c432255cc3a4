use leptos::*;
use leptos_router::use_query_map;
use rust_i18n::t;

use crate::components::layout::Layout;

mod categories;
mod dashboard;
mod orders;
mod products;
mod users;
pub mod utils;

pub use categories::AdminCategoriesTab;
pub use dashboard::AdminDashboardTab;
pub use orders::AdminOrdersTab;
pub use products::AdminProductsTab;
pub use users::AdminUsersTab;

/// The admin console is a single route with a tab strip; the active tab
/// lives in the query string so it survives reloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Orders,
    Products,
    Categories,
    Users,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Dashboard,
        Tab::Orders,
        Tab::Products,
        Tab::Categories,
        Tab::Users,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Orders => "orders",
            Tab::Products => "products",
            Tab::Categories => "categories",
            Tab::Users => "users",
        }
    }

    pub fn from_slug(raw: Option<&String>) -> Self {
        match raw.map(String::as_str) {
            Some("orders") => Tab::Orders,
            Some("products") => Tab::Products,
            Some("categories") => Tab::Categories,
            Some("users") => Tab::Users,
            _ => Tab::Dashboard,
        }
    }

    pub fn href(&self) -> String {
        match self {
            Tab::Dashboard => "/admin".to_string(),
            other => format!("/admin?tab={}", other.slug()),
        }
    }

    pub fn label(&self) -> String {
        let key = format!("admin.tab_{}", self.slug());
        t!(&key).to_string()
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let query = use_query_map();
    let tab = create_memo(move |_| query.with(|q| Tab::from_slug(q.get("tab"))));

    view! {
        <Layout>
            <h1 class="text-2xl font-bold text-fg mb-6">{t!("admin.title").to_string()}</h1>
            <nav class="flex flex-wrap gap-2 border-b border-border mb-6">
                {Tab::ALL
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <a
                                class=move || {
                                    if tab.get() == entry {
                                        "px-4 py-2 text-sm font-semibold text-fg border-b-2 border-action-primary-bg"
                                    } else {
                                        "px-4 py-2 text-sm font-medium text-fg-muted hover:text-fg"
                                    }
                                }
                                href=entry.href()
                            >
                                {entry.label()}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            {move || match tab.get() {
                Tab::Dashboard => view! { <AdminDashboardTab/> }.into_view(),
                Tab::Orders => view! { <AdminOrdersTab/> }.into_view(),
                Tab::Products => view! { <AdminProductsTab/> }.into_view(),
                Tab::Categories => view! { <AdminCategoriesTab/> }.into_view(),
                Tab::Users => view! { <AdminUsersTab/> }.into_view(),
            }}
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_slugs_land_on_the_dashboard() {
        assert_eq!(Tab::from_slug(None), Tab::Dashboard);
        assert_eq!(Tab::from_slug(Some(&"nope".to_string())), Tab::Dashboard);
        assert_eq!(Tab::from_slug(Some(&"users".to_string())), Tab::Users);
    }

    #[test]
    fn slugs_round_trip_through_hrefs() {
        assert_eq!(Tab::Dashboard.href(), "/admin");
        assert_eq!(Tab::Products.href(), "/admin?tab=products");
        for tab in Tab::ALL {
            assert_eq!(Tab::from_slug(Some(&tab.slug().to_string())), tab);
        }
    }
}
