#![cfg(not(coverage))]

use super::*;
use crate::api::credentials::{self, Credential};
use httpmock::prelude::*;
use httpmock::Method::PATCH;
use serde_json::json;

fn session_json(id: i64, role: &str) -> serde_json::Value {
    json!({
        "id": id,
        "username": "jane",
        "role": role,
        "image": "jane.png",
        "token": { "prefix": "Bearer", "token": "session-token" }
    })
}

fn user_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "username": "jane",
        "email": "jane@example.com",
        "role": "USER",
        "image": null
    })
}

fn category_json(id: i64, name: &str) -> serde_json::Value {
    json!({ "id": id, "name": name, "description": "Sweet things" })
}

fn product_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Baklava",
        "description": "With pistachio",
        "price": 12.5,
        "stock": 3,
        "image": "baklava.png",
        "categoryId": 2,
        "categoryName": "Desserts"
    })
}

fn page_json(content: Vec<serde_json::Value>, number: u32, total_pages: u32) -> serde_json::Value {
    json!({
        "content": content,
        "number": number,
        "totalPages": total_pages,
        "first": number == 0,
        "last": number + 1 >= total_pages,
        "totalElements": 11
    })
}

fn cart_json() -> serde_json::Value {
    json!({
        "id": 4,
        "items": [
            {
                "id": 41,
                "productId": 1,
                "productName": "Baklava",
                "priceAtTime": 12.5,
                "quantity": 2,
                "totalPrice": 25.0
            }
        ],
        "totalAmount": 25.0
    })
}

fn order_json(id: i64, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "userId": 7,
        "userName": "jane",
        "status": status,
        "totalAmount": 25.0,
        "shippingAddress": "1 Main St",
        "createdDate": "2025-03-01T10:00:00",
        "items": [
            {
                "id": 71,
                "productId": 1,
                "productName": "Baklava",
                "price": 12.5,
                "quantity": 2
            }
        ]
    })
}

fn payment_json(id: i64, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "orderId": 9,
        "amount": 25.0,
        "status": status,
        "paymentMethod": "CREDIT_CARD",
        "transactionId": "TXN-123",
        "description": null,
        "createdDate": "2025-03-01T10:05:00"
    })
}

fn review_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "userId": 7,
        "userName": "jane",
        "rating": 5,
        "comment": "Excellent",
        "createdDate": "2025-03-02T09:00:00"
    })
}

fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.base_url())
}

#[tokio::test]
async fn catalog_endpoints_decode_paged_and_plain_envelopes() {
    let server = MockServer::start_async().await;

    server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/products")
            .query_param("page", "0")
            .query_param("size", "5");
        then.status(200)
            .json_body(page_json(vec![product_json(1)], 0, 3));
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/products/search")
            .query_param("keyword", "bakla");
        then.status(200)
            .json_body(page_json(vec![product_json(1)], 0, 1));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/products/category/2");
        then.status(200)
            .json_body(page_json(vec![product_json(1)], 0, 1));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/products/1");
        then.status(200).json_body(product_json(1));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/categories");
        then.status(200)
            .json_body(page_json(vec![category_json(2, "Desserts")], 0, 1));
    });

    let client = api_client(&server);
    let page = client.list_products(0, PRODUCT_PAGE_SIZE).await.unwrap();
    assert_eq!(page.content.len(), 1);
    assert_eq!(page.total_pages, 3);
    assert!(page.first);
    assert!(!page.last);

    let found = client.search_products("bakla", 0, 5).await.unwrap();
    assert_eq!(found.content[0].name, "Baklava");

    let by_category = client.products_by_category(2, 0, 5).await.unwrap();
    assert_eq!(by_category.content[0].resolved_category_id(), Some(2));

    let product = client.get_product(1).await.unwrap();
    assert!(product.is_low_stock());
    assert_eq!(product.category_label(), Some("Desserts"));

    let categories = client.list_categories(0, 50).await.unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].name, "Desserts");
}

#[tokio::test]
async fn category_listing_accepts_bare_arrays() {
    let server = MockServer::start_async().await;

    server.mock(|when, then| {
        when.method(GET).path("/api/v1/categories");
        then.status(200)
            .json_body(json!([category_json(1, "Drinks"), category_json(2, "Desserts")]));
    });

    let client = api_client(&server);
    let categories = client.list_categories(0, 50).await.unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[1].name, "Desserts");
}

#[tokio::test]
async fn rating_endpoint_accepts_number_and_object_shapes() {
    let server = MockServer::start_async().await;

    server.mock(|when, then| {
        when.method(GET).path("/api/v1/reviews/product/1/rating");
        then.status(200).json_body(json!(4.5));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/reviews/product/2/rating");
        then.status(200).json_body(json!({ "averageRating": 3.25 }));
    });

    let client = api_client(&server);
    assert_eq!(client.product_rating(1).await.unwrap().value(), 4.5);
    assert_eq!(client.product_rating(2).await.unwrap().value(), 3.25);
}

#[tokio::test]
async fn auth_and_account_endpoints_succeed() {
    let server = MockServer::start_async().await;

    server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/auth")
            .json_body(json!({ "email": "jane@example.com", "password": "pass" }));
        then.status(200).json_body(session_json(7, "ADMIN"));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/users");
        then.status(200).json_body(json!({ "message": "Check your inbox" }));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/users/token/activate-me");
        then.status(200).json_body(json!({ "message": "Account activated" }));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/users/password-reset");
        then.status(200).json_body(json!({ "message": "Reset mail sent" }));
    });
    server.mock(|when, then| {
        when.method(PATCH).path("/api/v1/users/password-reset");
        then.status(200).json_body(json!({ "message": "Password updated" }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/users/7");
        then.status(200).json_body(user_json(7));
    });

    let client = api_client(&server);
    let session = client
        .login(&LoginRequest {
            email: "jane@example.com".into(),
            password: "pass".into(),
        })
        .await
        .unwrap();
    assert_eq!(session.id, 7);
    assert!(session.is_admin());
    assert_eq!(
        session.token.unwrap().header_value(),
        "Bearer session-token"
    );

    let signed_up = client
        .sign_up(&SignUpRequest {
            username: "jane".into(),
            email: "jane@example.com".into(),
            password: "pass".into(),
        })
        .await
        .unwrap();
    assert_eq!(signed_up.message, "Check your inbox");

    assert_eq!(
        client.activate("activate-me").await.unwrap().message,
        "Account activated"
    );
    assert_eq!(
        client
            .request_password_reset("jane@example.com")
            .await
            .unwrap()
            .message,
        "Reset mail sent"
    );
    assert_eq!(
        client
            .set_password("reset-token", "newpass")
            .await
            .unwrap()
            .message,
        "Password updated"
    );
    assert_eq!(client.get_user(7).await.unwrap().username, "jane");
}

#[tokio::test]
async fn cart_order_and_payment_endpoints_succeed() {
    let server = MockServer::start_async().await;

    server.mock(|when, then| {
        when.method(GET).path("/api/v1/cart");
        then.status(200).json_body(cart_json());
    });
    server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/cart/add")
            .json_body(json!({ "productId": 1, "quantity": 2 }));
        then.status(200).json_body(json!({}));
    });
    server.mock(|when, then| {
        when.method(PUT)
            .path("/api/v1/cart/items/41")
            .json_body(json!({ "quantity": 3 }));
        then.status(200).json_body(json!({}));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/api/v1/cart/items/41");
        then.status(200).json_body(json!({}));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/api/v1/cart");
        then.status(200).json_body(json!({}));
    });

    server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/orders")
            .query_param("size", "5");
        then.status(200)
            .json_body(page_json(vec![order_json(9, "PENDING")], 0, 1));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/orders/9");
        then.status(200).json_body(order_json(9, "PENDING"));
    });
    server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/orders")
            .json_body(json!({ "shippingAddress": "1 Main St" }));
        then.status(200).json_body(order_json(10, "PENDING"));
    });
    server.mock(|when, then| {
        when.method(PUT)
            .path("/api/v1/orders/9/status")
            .json_body(json!({ "status": "CANCELLED" }));
        then.status(200).json_body(json!({}));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/api/v1/orders/9");
        then.status(200).json_body(json!({}));
    });

    server.mock(|when, then| {
        when.method(GET).path("/api/v1/payments/3");
        then.status(200).json_body(payment_json(3, "COMPLETED"));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/payments/order/9");
        then.status(200).json_body(payment_json(3, "COMPLETED"));
    });
    server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/payments/order/9")
            .json_body(json!({ "paymentMethod": "CREDIT_CARD", "description": "gift" }));
        then.status(200).json_body(payment_json(4, "COMPLETED"));
    });
    server.mock(|when, then| {
        when.method(PUT)
            .path("/api/v1/payments/3/status")
            .json_body(json!({ "status": "REFUNDED" }));
        then.status(200).json_body(json!({}));
    });

    let client = api_client(&server);

    let cart = client.get_cart().await.unwrap();
    assert_eq!(cart.total_quantity(), 2);
    client.add_to_cart(1, 2).await.unwrap();
    client.update_cart_item(41, 3).await.unwrap();
    client.remove_cart_item(41).await.unwrap();
    client.clear_cart().await.unwrap();

    let orders = client.list_orders(0, ORDER_PAGE_SIZE).await.unwrap();
    assert!(orders.content[0].is_payable());
    let order = client.get_order(9).await.unwrap();
    assert_eq!(order.customer_label(), "jane");
    let created = client.create_order("1 Main St").await.unwrap();
    assert_eq!(created.id, 10);
    client.cancel_order(9).await.unwrap();
    client.delete_order(9).await.unwrap();

    let payment = client.get_payment(3).await.unwrap();
    assert!(payment.is_completed());
    assert_eq!(
        client.payment_for_order(9).await.unwrap().transaction_id,
        Some("TXN-123".into())
    );
    let paid = client
        .create_payment(9, PaymentMethod::CreditCard, Some("gift"))
        .await
        .unwrap();
    assert_eq!(paid.id, 4);
    client
        .update_payment_status(3, PaymentStatus::Refunded)
        .await
        .unwrap();
}

#[tokio::test]
async fn review_user_and_admin_endpoints_succeed() {
    let server = MockServer::start_async().await;

    server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/reviews/product/1")
            .query_param("size", "5");
        then.status(200)
            .json_body(page_json(vec![review_json(5)], 0, 1));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/reviews/5");
        then.status(200).json_body(review_json(5));
    });
    server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/reviews/product/1")
            .json_body(json!({ "rating": 5, "comment": "Excellent" }));
        then.status(200).json_body(json!({}));
    });
    server.mock(|when, then| {
        when.method(PUT).path("/api/v1/reviews/5");
        then.status(200).json_body(json!({}));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/api/v1/reviews/5");
        then.status(200).json_body(json!({}));
    });

    server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/users")
            .query_param("size", "10");
        then.status(200)
            .json_body(page_json(vec![user_json(7)], 0, 1));
    });
    server.mock(|when, then| {
        when.method(PUT)
            .path("/api/v1/users/7")
            .json_body(json!({ "role": "ADMIN" }));
        then.status(200).json_body(json!({}));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/api/v1/users/7");
        then.status(200).json_body(json!({}));
    });

    server.mock(|when, then| {
        when.method(GET).path("/api/v1/admin/stats/users");
        then.status(200).json_body(json!(12));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/admin/stats/products");
        then.status(200).json_body(json!(34));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/admin/stats/orders");
        then.status(200).json_body(json!(56));
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/admin/orders")
            .query_param("size", "10");
        then.status(200)
            .json_body(page_json(vec![order_json(9, "SHIPPED")], 0, 1));
    });

    let client = api_client(&server);

    let reviews = client.list_reviews(1, 0, REVIEW_PAGE_SIZE).await.unwrap();
    assert_eq!(reviews.content[0].rating, 5);
    assert_eq!(client.get_review(5).await.unwrap().id, 5);
    client
        .create_review(
            1,
            &ReviewPayload {
                rating: 5,
                comment: "Excellent".into(),
            },
        )
        .await
        .unwrap();
    client
        .update_review(
            5,
            &ReviewPayload {
                rating: 4,
                comment: "Still good".into(),
            },
        )
        .await
        .unwrap();
    client.delete_review(5).await.unwrap();

    let users = client.list_users(0, ADMIN_PAGE_SIZE).await.unwrap();
    assert_eq!(users.content[0].username, "jane");
    client.update_user_role(7, Role::Admin).await.unwrap();
    client.delete_user(7).await.unwrap();

    let stats = client.admin_stats().await.unwrap();
    assert_eq!(
        stats,
        AdminStats {
            users: 12,
            products: 34,
            orders: 56
        }
    );
    let all_orders = client.list_all_orders(0, ADMIN_PAGE_SIZE).await.unwrap();
    assert_eq!(all_orders.content[0].status, OrderStatus::Shipped);
}

#[tokio::test]
async fn requests_carry_persisted_credential_until_cleared() {
    let server = MockServer::start_async().await;

    let authorized = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/products/1")
            .header("authorization", "Bearer wire-token");
        then.status(200).json_body(product_json(1));
    });

    credentials::save(&Credential::new("Bearer", "wire-token"));
    let client = api_client(&server);
    client.get_product(1).await.unwrap();
    authorized.assert_async().await;

    // Once the store is cleared the header disappears, so the mock above
    // no longer matches and the request falls through.
    credentials::clear();
    let err = client.get_product(1).await.unwrap_err();
    assert!(!err.is_unauthorized());
    authorized.assert_hits_async(1).await;
}

#[tokio::test]
async fn requests_carry_accept_language_header() {
    let server = MockServer::start_async().await;

    let localized = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/products/1")
            .header_exists("accept-language");
        then.status(200).json_body(product_json(1));
    });

    let client = api_client(&server);
    client.get_product(1).await.unwrap();
    localized.assert_async().await;
}

#[tokio::test]
async fn unauthorized_maps_to_dedicated_error() {
    let server = MockServer::start_async().await;

    server.mock(|when, then| {
        when.method(GET).path("/api/v1/orders");
        then.status(401)
            .json_body(json!({ "message": "Full authentication is required" }));
    });

    let client = api_client(&server);
    let err = client.list_orders(0, 5).await.unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn error_envelope_surfaces_message_and_field_errors() {
    let server = MockServer::start_async().await;

    server.mock(|when, then| {
        when.method(POST).path("/api/v1/users");
        then.status(400).json_body(json!({
            "message": "Validation error",
            "validationErrors": { "email": "E-mail in use" }
        }));
    });

    let client = api_client(&server);
    let err = client
        .sign_up(&SignUpRequest {
            username: "jane".into(),
            email: "jane@example.com".into(),
            password: "pass".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Validation error");
    assert_eq!(err.field_error("email"), Some("E-mail in use"));
    assert_eq!(err.field_error("username"), None);
}

#[tokio::test]
async fn cancelled_token_short_circuits_requests() {
    let server = MockServer::start_async().await;

    let never_reached = server.mock(|when, then| {
        when.method(GET).path("/api/v1/cart");
        then.status(200).json_body(cart_json());
    });

    let token = CancelToken::new();
    token.cancel();
    let client = api_client(&server).with_cancel(token);
    let err = client.get_cart().await.unwrap_err();
    assert!(err.is_cancelled());
    never_reached.assert_hits_async(0).await;
}

// Review, category and activation traffic goes through handles views
// build with their mount token; once that token fires, none of it may
// reach the backend.
#[tokio::test]
async fn cancelled_token_covers_review_category_and_activation_calls() {
    let server = MockServer::start_async().await;

    let reviews = server.mock(|when, then| {
        when.method(GET).path("/api/v1/reviews/product/1");
        then.status(200)
            .json_body(page_json(vec![review_json(1)], 0, 1));
    });
    let categories = server.mock(|when, then| {
        when.method(GET).path("/api/v1/categories");
        then.status(200)
            .json_body(page_json(vec![category_json(2, "Cakes")], 0, 1));
    });
    let activation = server.mock(|when, then| {
        when.method(POST).path("/api/v1/users/token/abc");
        then.status(200).json_body(json!({ "message": "Activated" }));
    });

    let token = CancelToken::new();
    token.cancel();
    let client = api_client(&server).with_cancel(token);

    let err = client.list_reviews(1, 0, REVIEW_PAGE_SIZE).await.unwrap_err();
    assert!(err.is_cancelled());
    let err = client.list_categories(0, 50).await.unwrap_err();
    assert!(err.is_cancelled());
    let err = client.activate("abc").await.unwrap_err();
    assert!(err.is_cancelled());

    reviews.assert_hits_async(0).await;
    categories.assert_hits_async(0).await;
    activation.assert_hits_async(0).await;
}

#[tokio::test]
async fn cancelling_mid_flight_aborts_the_request() {
    let server = MockServer::start_async().await;

    server.mock(|when, then| {
        when.method(GET).path("/api/v1/cart");
        then.status(200)
            .delay(std::time::Duration::from_secs(5))
            .json_body(cart_json());
    });

    let token = CancelToken::new();
    let client = api_client(&server).with_cancel(token.clone());
    let request = client.get_cart();
    let cancel = async {
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        token.cancel();
    };
    let (result, ()) = tokio::join!(request, cancel);
    assert!(result.unwrap_err().is_cancelled());
}
