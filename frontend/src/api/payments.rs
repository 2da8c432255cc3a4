use serde_json::json;

use super::client::ApiClient;
use super::error::ApiError;
use super::types::{PaymentMethod, PaymentResponse, PaymentStatus};

impl ApiClient {
    pub async fn get_payment(&self, id: i64) -> Result<PaymentResponse, ApiError> {
        self.get_json(&format!("/api/v1/payments/{}", id), &[])
            .await
    }

    /// 404 here is the normal answer for an order nobody has paid yet;
    /// callers treat that as "no payment" rather than an error.
    pub async fn payment_for_order(&self, order_id: i64) -> Result<PaymentResponse, ApiError> {
        self.get_json(&format!("/api/v1/payments/order/{}", order_id), &[])
            .await
    }

    pub async fn create_payment(
        &self,
        order_id: i64,
        method: PaymentMethod,
        description: Option<&str>,
    ) -> Result<PaymentResponse, ApiError> {
        self.post_json(
            &format!("/api/v1/payments/order/{}", order_id),
            &json!({ "paymentMethod": method, "description": description }),
        )
        .await
    }

    pub async fn update_payment_status(
        &self,
        id: i64,
        status: PaymentStatus,
    ) -> Result<(), ApiError> {
        self.put_unit(
            &format!("/api/v1/payments/{}/status", id),
            &json!({ "status": status }),
        )
        .await
    }
}
