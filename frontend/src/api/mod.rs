mod admin;
mod auth;
pub mod cancel;
mod cart;
mod categories;
pub mod client;
pub mod credentials;
pub mod error;
mod orders;
mod payments;
mod products;
mod reviews;
pub mod types;
mod users;

pub use admin::ADMIN_PAGE_SIZE;
pub use cancel::CancelToken;
pub use client::*;
pub use error::ApiError;
pub use orders::ORDER_PAGE_SIZE;
pub use products::PRODUCT_PAGE_SIZE;
pub use reviews::REVIEW_PAGE_SIZE;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
