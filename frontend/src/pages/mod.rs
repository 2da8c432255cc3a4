pub mod activation;
pub mod admin;
pub mod cart;
pub mod home;
pub mod login;
pub mod orders;
pub mod password_reset;
pub mod payment;
pub mod products;
pub mod signup;
pub mod user;

pub use activation::ActivationPage;
pub use admin::AdminPage;
pub use cart::CartPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use orders::{OrderDetailPage, OrdersPage};
pub use password_reset::{PasswordResetRequestPage, PasswordResetSetPage};
pub use payment::PaymentPage;
pub use products::{ProductDetailPage, ProductsPage};
pub use signup::SignUpPage;
pub use user::UserPage;
