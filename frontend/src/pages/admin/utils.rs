/// Price as typed into the product form. Rejects anything that is not a
/// positive finite number.
pub fn parse_price(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price > 0.0)
}

/// Stock as typed into the product form; zero is a valid "sold out".
pub fn parse_stock(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok().filter(|stock| *stock >= 0)
}

/// Category select value; the blank option means "no category".
pub fn parse_category(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

/// Admins never edit or delete their own account from the users tab;
/// that keeps the console from locking itself out.
pub fn is_own_account(session_id: i64, row_id: i64) -> bool {
    session_id == row_id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_price_requires_a_positive_number() {
        assert_eq!(parse_price("12.50"), Some(12.5));
        assert_eq!(parse_price(" 3 "), Some(3.0));
        assert_eq!(parse_price("0"), None);
        assert_eq!(parse_price("-4"), None);
        assert_eq!(parse_price("NaN"), None);
        assert_eq!(parse_price("abc"), None);
    }

    #[test]
    fn parse_stock_allows_zero_but_not_negatives() {
        assert_eq!(parse_stock("0"), Some(0));
        assert_eq!(parse_stock("25"), Some(25));
        assert_eq!(parse_stock("-1"), None);
        assert_eq!(parse_stock("lots"), None);
    }

    #[test]
    fn parse_category_treats_blank_as_none() {
        assert_eq!(parse_category(""), None);
        assert_eq!(parse_category("0"), None);
        assert_eq!(parse_category("7"), Some(7));
    }

    #[test]
    fn own_account_is_flagged() {
        assert!(is_own_account(3, 3));
        assert!(!is_own_account(3, 4));
    }
}
