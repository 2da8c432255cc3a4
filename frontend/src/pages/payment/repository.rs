use crate::api::{
    ApiClient, ApiError, OrderResponse, PaymentMethod, PaymentResponse,
};

/// Everything the payment view shows at once: the order being paid and
/// whatever payment already exists for it.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentContext {
    pub order: OrderResponse,
    pub payment: Option<PaymentResponse>,
}

#[derive(Clone)]
pub struct PaymentRepository {
    api: ApiClient,
}

impl PaymentRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn load(&self, order_id: i64) -> Result<PaymentContext, ApiError> {
        let order = self.api.get_order(order_id).await?;
        let payment = match self.api.payment_for_order(order_id).await {
            Ok(payment) => Some(payment),
            Err(err) if err.is_not_found() => None,
            Err(err) => return Err(err),
        };
        Ok(PaymentContext { order, payment })
    }

    pub async fn pay(
        &self,
        order_id: i64,
        method: PaymentMethod,
        description: Option<&str>,
    ) -> Result<PaymentResponse, ApiError> {
        let description = description.map(str::trim).filter(|d| !d.is_empty());
        let payment = self.api.create_payment(order_id, method, description).await?;
        // The backend empties the cart when the order was created, but a
        // stale local cart can survive a retried payment; clearing is
        // harmless when it is already empty.
        let _ = self.api.clear_cart().await;
        Ok(payment)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn load_treats_missing_payment_as_none() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/orders/5");
            then.status(200).json_body(json!({
                "id": 5,
                "status": "PENDING",
                "totalAmount": 30.0
            }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/payments/order/5");
            then.status(404)
                .json_body(json!({ "message": "Payment not found" }));
        });

        let repo = PaymentRepository::new(ApiClient::new_with_base_url(server.base_url()));
        let context = repo.load(5).await.unwrap();
        assert_eq!(context.order.id, 5);
        assert!(context.payment.is_none());
    }

    #[tokio::test]
    async fn load_returns_the_existing_payment() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/orders/5");
            then.status(200).json_body(json!({
                "id": 5,
                "status": "CONFIRMED",
                "totalAmount": 30.0
            }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/payments/order/5");
            then.status(200).json_body(json!({
                "id": 77,
                "orderId": 5,
                "amount": 30.0,
                "status": "COMPLETED",
                "transactionId": "TXN-123"
            }));
        });

        let repo = PaymentRepository::new(ApiClient::new_with_base_url(server.base_url()));
        let context = repo.load(5).await.unwrap();
        let payment = context.payment.unwrap();
        assert!(payment.is_completed());
        assert_eq!(payment.transaction_id.as_deref(), Some("TXN-123"));
    }

    #[tokio::test]
    async fn pay_posts_the_method_and_drops_blank_descriptions() {
        let server = MockServer::start_async().await;
        let create = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v1/payments/order/5")
                .json_body(json!({ "paymentMethod": "PAYPAL", "description": null }));
            then.status(200).json_body(json!({
                "id": 78,
                "orderId": 5,
                "amount": 30.0,
                "status": "COMPLETED"
            }));
        });
        let clear = server.mock(|when, then| {
            when.method(DELETE).path("/api/v1/cart");
            then.status(200);
        });

        let repo = PaymentRepository::new(ApiClient::new_with_base_url(server.base_url()));
        let payment = repo.pay(5, PaymentMethod::Paypal, Some("   ")).await.unwrap();
        assert_eq!(payment.id, 78);
        create.assert_async().await;
        clear.assert_async().await;
    }
}
