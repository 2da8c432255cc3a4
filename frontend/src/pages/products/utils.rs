use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::repository::ListQuery;

/// Zero-based page index from the `page` query parameter; anything
/// missing or unparseable is the first page.
pub fn parse_page(raw: Option<&String>) -> u32 {
    raw.and_then(|p| p.parse().ok()).unwrap_or(0)
}

pub fn parse_id(raw: Option<&String>) -> Option<i64> {
    raw.and_then(|p| p.parse().ok()).filter(|id| *id > 0)
}

/// Grid path for a filter and page, the target of pagination clicks.
pub fn list_path(query: &ListQuery, page: u32) -> String {
    let mut path = String::from("/products");
    let mut params: Vec<String> = Vec::new();
    match query {
        ListQuery::All => {}
        ListQuery::Search(term) => params.push(format!(
            "search={}",
            utf8_percent_encode(term, NON_ALPHANUMERIC)
        )),
        ListQuery::Category(id) => params.push(format!("category={}", id)),
    }
    if page > 0 {
        params.push(format!("page={}", page));
    }
    if !params.is_empty() {
        path.push('?');
        path.push_str(&params.join("&"));
    }
    path
}

/// Order quantity clamped to what the shelf can cover, never below one.
pub fn clamp_quantity(value: i32, stock: i32) -> i32 {
    value.clamp(1, stock.max(1))
}
