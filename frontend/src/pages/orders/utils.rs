use rust_i18n::t;

use crate::api::OrderStatus;

/// Badge styling per status; the palette only has three accents, so the
/// in-between fulfilment states share the neutral one.
pub fn status_badge_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "bg-status-warning-bg text-status-warning-text",
        OrderStatus::Delivered => "bg-status-success-bg text-status-success-text",
        OrderStatus::Cancelled => "bg-status-error-bg text-status-error-text",
        OrderStatus::Confirmed
        | OrderStatus::Processing
        | OrderStatus::Shipped
        | OrderStatus::Unknown => "bg-surface-muted text-fg-muted",
    }
}

pub fn status_label(status: OrderStatus) -> String {
    let key = format!("order_status.{}", status.as_str().to_lowercase());
    let translated = t!(&key).to_string();
    if translated == key || translated.ends_with(&format!(".{}", key)) {
        status.as_str().to_string()
    } else {
        translated
    }
}

/// History path for a page, the target of pagination clicks.
pub fn history_path(page: u32) -> String {
    if page > 0 {
        format!("/orders?page={}", page)
    } else {
        "/orders".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_statuses_get_accent_badges() {
        assert!(status_badge_class(OrderStatus::Delivered).contains("success"));
        assert!(status_badge_class(OrderStatus::Cancelled).contains("error"));
        assert!(status_badge_class(OrderStatus::Pending).contains("warning"));
        assert!(status_badge_class(OrderStatus::Shipped).contains("surface-muted"));
    }

    #[test]
    fn status_label_falls_back_to_the_wire_name() {
        rust_i18n::set_locale("en");
        assert_eq!(status_label(OrderStatus::Pending), "Pending");
        assert_eq!(status_label(OrderStatus::Unknown), "UNKNOWN");
    }

    #[test]
    fn history_path_omits_the_first_page() {
        assert_eq!(history_path(0), "/orders");
        assert_eq!(history_path(3), "/orders?page=3");
    }
}
