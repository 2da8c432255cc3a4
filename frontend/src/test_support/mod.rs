#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::credentials::Credential;
    use crate::api::{
        CartItemResponse, CartResponse, CategoryResponse, OrderItemResponse, OrderResponse,
        OrderStatus, ProductResponse, ReviewResponse, Role, Session,
    };
    use crate::state::auth::SessionContext;
    use leptos::*;

    pub fn admin_session() -> Session {
        Session {
            id: 1,
            username: "admin".into(),
            role: Role::Admin,
            image: None,
            token: Some(Credential::new("Bearer", "admin-token")),
        }
    }

    pub fn customer_session() -> Session {
        Session {
            id: 7,
            username: "jane".into(),
            role: Role::User,
            image: Some("jane.png".into()),
            token: Some(Credential::new("Bearer", "customer-token")),
        }
    }

    /// Installs a session context the way the application root does, so
    /// components under test see the given identity.
    pub fn provide_session(session: Session) -> SessionContext {
        let ctx = create_signal(session);
        provide_context::<SessionContext>(ctx);
        ctx
    }

    pub fn product(id: i64, name: &str, stock: i32) -> ProductResponse {
        ProductResponse {
            id,
            name: name.into(),
            description: Some("Fresh from the oven".into()),
            price: 12.5,
            stock,
            image: Some("product.png".into()),
            category_id: Some(2),
            category_name: Some("Desserts".into()),
            category: None,
        }
    }

    pub fn category(id: i64, name: &str) -> CategoryResponse {
        CategoryResponse {
            id,
            name: name.into(),
            description: None,
        }
    }

    pub fn cart_with_quantity(quantity: i32) -> CartResponse {
        CartResponse {
            id: Some(4),
            items: vec![CartItemResponse {
                id: 41,
                product_id: Some(1),
                product_name: "Baklava".into(),
                price_at_time: 12.5,
                quantity,
                total_price: 12.5 * f64::from(quantity),
            }],
            total_amount: 12.5 * f64::from(quantity),
        }
    }

    pub fn order(id: i64, status: OrderStatus) -> OrderResponse {
        OrderResponse {
            id,
            user_id: Some(7),
            user_name: Some("jane".into()),
            status,
            total_amount: 25.0,
            shipping_address: Some("1 Main St".into()),
            created_date: Some("2025-03-01T10:00:00".into()),
            items: vec![OrderItemResponse {
                id: Some(71),
                product_id: Some(1),
                product_name: "Baklava".into(),
                price: 12.5,
                quantity: 2,
            }],
        }
    }

    pub fn review(id: i64, user_id: i64, rating: i32) -> ReviewResponse {
        ReviewResponse {
            id,
            user_id: Some(user_id),
            user_name: Some("jane".into()),
            rating,
            comment: Some("Excellent".into()),
            created_date: Some("2025-03-02T09:00:00".into()),
        }
    }
}
