use serde::{Deserialize, Serialize};

use super::credentials::Credential;

/// Account role. Gates the admin console and the self-modification
/// guards in the user management view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The current identity, anonymous or authenticated. `id == 0` is the
/// anonymous sentinel; the same shape is what a successful login returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub token: Option<Credential>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self {
            id: 0,
            username: String::new(),
            role: Role::User,
            image: None,
            token: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.id != 0
    }

    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.role == Role::Admin
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::anonymous()
    }
}

/// Paged list envelope used by every collection endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub last: bool,
    #[serde(default)]
    pub total_elements: Option<u64>,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            content: Vec::new(),
            number: 0,
            total_pages: 0,
            first: true,
            last: true,
            total_elements: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// The category list endpoint answers with a paged envelope or a bare
/// array depending on backend version; accept both.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CategoryListing {
    Paged(Page<CategoryResponse>),
    Plain(Vec<CategoryResponse>),
}

impl CategoryListing {
    pub fn into_items(self) -> Vec<CategoryResponse> {
        match self {
            CategoryListing::Paged(page) => page.content,
            CategoryListing::Plain(items) => items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default, alias = "stockQuantity")]
    pub stock: i32,
    #[serde(default, alias = "imageUrl")]
    pub image: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub category: Option<CategoryResponse>,
}

impl ProductResponse {
    /// Category display name; the backend embeds either a flat name or a
    /// nested category object.
    pub fn category_label(&self) -> Option<&str> {
        self.category
            .as_ref()
            .map(|c| c.name.as_str())
            .or(self.category_name.as_deref())
    }

    pub fn resolved_category_id(&self) -> Option<i64> {
        self.category.as_ref().map(|c| c.id).or(self.category_id)
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.stock <= 0
    }

    pub fn is_low_stock(&self) -> bool {
        self.stock > 0 && self.stock <= 5
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemResponse {
    pub id: i64,
    #[serde(default)]
    pub product_id: Option<i64>,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub price_at_time: f64,
    #[serde(default)]
    pub quantity: i32,
    #[serde(default)]
    pub total_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub items: Vec<CartItemResponse>,
    #[serde(default)]
    pub total_amount: f64,
}

impl CartResponse {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item quantities summed, the number the navigation badge shows.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|item| i64::from(item.quantity)).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// Statuses an admin can assign from the orders table.
    pub const SELECTABLE: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Processing => "PROCESSING",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
            OrderStatus::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemResponse {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub product_id: Option<i64>,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub quantity: i32,
}

impl OrderItemResponse {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub user_name: Option<String>,
    pub status: OrderStatus,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub shipping_address: Option<String>,
    #[serde(default)]
    pub created_date: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItemResponse>,
}

impl OrderResponse {
    /// Customer column in the admin tables: username when the backend
    /// includes it, otherwise a user-id placeholder.
    pub fn customer_label(&self) -> String {
        match (&self.user_name, self.user_id) {
            (Some(name), _) if !name.is_empty() => name.clone(),
            (_, Some(user_id)) => format!("User #{}", user_id),
            _ => "Unknown".to_string(),
        }
    }

    pub fn is_payable(&self) -> bool {
        self.status == OrderStatus::Pending
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    BankTransfer,
    Paypal,
    Wallet,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 5] = [
        PaymentMethod::CreditCard,
        PaymentMethod::DebitCard,
        PaymentMethod::BankTransfer,
        PaymentMethod::Paypal,
        PaymentMethod::Wallet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "CREDIT_CARD",
            PaymentMethod::DebitCard => "DEBIT_CARD",
            PaymentMethod::BankTransfer => "BANK_TRANSFER",
            PaymentMethod::Paypal => "PAYPAL",
            PaymentMethod::Wallet => "WALLET",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::DebitCard => "Debit Card",
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::Paypal => "PayPal",
            PaymentMethod::Wallet => "Wallet",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub id: i64,
    #[serde(default)]
    pub order_id: Option<i64>,
    #[serde(default)]
    pub amount: f64,
    pub status: PaymentStatus,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_date: Option<String>,
}

impl PaymentResponse {
    pub fn is_completed(&self) -> bool {
        self.status == PaymentStatus::Completed
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub rating: i32,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub created_date: Option<String>,
}

/// The rating endpoint answers with a bare number or a wrapper object
/// depending on backend version; accept both.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RatingSummary {
    Value(f64),
    #[serde(rename_all = "camelCase")]
    Object { average_rating: f64 },
}

impl RatingSummary {
    pub fn value(&self) -> f64 {
        let raw = match self {
            RatingSummary::Value(v) => *v,
            RatingSummary::Object { average_rating } => *average_rating,
        };
        if raw.is_finite() {
            raw
        } else {
            0.0
        }
    }
}

/// `{ "message": ... }` envelope for signup, activation and the password
/// reset flows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericResponse {
    pub message: String,
}

/// Admin dashboard counters, assembled from three stats endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AdminStats {
    pub users: i64,
    pub products: i64,
    pub orders: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPayload {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewPayload {
    pub rating: i32,
    pub comment: String,
}
