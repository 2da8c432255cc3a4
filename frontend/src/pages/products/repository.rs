use crate::api::{ApiClient, ApiError, Page, ProductResponse, PRODUCT_PAGE_SIZE};

/// The three ways the catalog grid is filled, decided by the query
/// string. A search term wins over a category filter because the
/// navigation search box always navigates with `search` alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListQuery {
    All,
    Search(String),
    Category(i64),
}

impl ListQuery {
    pub fn from_params(search: Option<&String>, category: Option<&String>) -> Self {
        if let Some(term) = search.map(|s| s.trim()).filter(|s| !s.is_empty()) {
            return ListQuery::Search(term.to_string());
        }
        if let Some(id) = category.and_then(|c| c.parse::<i64>().ok()) {
            return ListQuery::Category(id);
        }
        ListQuery::All
    }
}

#[derive(Clone)]
pub struct ProductsRepository {
    api: ApiClient,
}

impl ProductsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// One grid page for the current filter, storefront page size.
    pub async fn load_page(
        &self,
        query: &ListQuery,
        page: u32,
    ) -> Result<Page<ProductResponse>, ApiError> {
        match query {
            ListQuery::All => self.api.list_products(page, PRODUCT_PAGE_SIZE).await,
            ListQuery::Search(term) => {
                self.api
                    .search_products(term, page, PRODUCT_PAGE_SIZE)
                    .await
            }
            ListQuery::Category(id) => {
                self.api
                    .products_by_category(*id, page, PRODUCT_PAGE_SIZE)
                    .await
            }
        }
    }

    pub async fn load_detail(&self, id: i64) -> Result<ProductResponse, ApiError> {
        self.api.get_product(id).await
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn product_page() -> serde_json::Value {
        json!({
            "content": [{ "id": 1, "name": "Baklava", "price": 12.5, "stock": 3 }],
            "number": 0,
            "totalPages": 2,
            "first": true,
            "last": false
        })
    }

    #[tokio::test]
    async fn all_query_hits_the_plain_listing() {
        let server = MockServer::start_async().await;
        let listing = server.mock(|when, then| {
            when.method(GET)
                .path("/api/v1/products")
                .query_param("page", "0")
                .query_param("size", "5");
            then.status(200).json_body(product_page());
        });

        let repo = ProductsRepository::new(ApiClient::new_with_base_url(server.base_url()));
        let page = repo.load_page(&ListQuery::All, 0).await.unwrap();
        assert_eq!(page.content.len(), 1);
        listing.assert_async().await;
    }

    #[tokio::test]
    async fn search_query_hits_the_keyword_endpoint() {
        let server = MockServer::start_async().await;
        let search = server.mock(|when, then| {
            when.method(GET)
                .path("/api/v1/products/search")
                .query_param("keyword", "baklava")
                .query_param("page", "1");
            then.status(200).json_body(product_page());
        });

        let repo = ProductsRepository::new(ApiClient::new_with_base_url(server.base_url()));
        repo.load_page(&ListQuery::Search("baklava".into()), 1)
            .await
            .unwrap();
        search.assert_async().await;
    }

    #[tokio::test]
    async fn category_query_hits_the_category_endpoint() {
        let server = MockServer::start_async().await;
        let by_category = server.mock(|when, then| {
            when.method(GET).path("/api/v1/products/category/3");
            then.status(200).json_body(product_page());
        });

        let repo = ProductsRepository::new(ApiClient::new_with_base_url(server.base_url()));
        repo.load_page(&ListQuery::Category(3), 0).await.unwrap();
        by_category.assert_async().await;
    }
}
