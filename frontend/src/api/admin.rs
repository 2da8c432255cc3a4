use futures::try_join;

use super::client::ApiClient;
use super::error::ApiError;
use super::types::{AdminStats, OrderResponse, Page};

/// Back-office tables page in tens.
pub const ADMIN_PAGE_SIZE: u32 = 10;

impl ApiClient {
    /// The stats endpoints answer with a bare JSON number.
    pub async fn count_users(&self) -> Result<i64, ApiError> {
        self.get_json("/api/v1/admin/stats/users", &[]).await
    }

    pub async fn count_products(&self) -> Result<i64, ApiError> {
        self.get_json("/api/v1/admin/stats/products", &[]).await
    }

    pub async fn count_orders(&self) -> Result<i64, ApiError> {
        self.get_json("/api/v1/admin/stats/orders", &[]).await
    }

    /// Loads the three dashboard counters concurrently.
    pub async fn admin_stats(&self) -> Result<AdminStats, ApiError> {
        let (users, products, orders) = try_join!(
            self.count_users(),
            self.count_products(),
            self.count_orders()
        )?;
        Ok(AdminStats {
            users,
            products,
            orders,
        })
    }

    /// Every order in the system, newest first, for the admin orders tab.
    pub async fn list_all_orders(
        &self,
        page: u32,
        size: u32,
    ) -> Result<Page<OrderResponse>, ApiError> {
        self.get_json(
            "/api/v1/admin/orders",
            &[("page", page.to_string()), ("size", size.to_string())],
        )
        .await
    }
}
