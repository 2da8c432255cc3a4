pub mod card;
pub mod reviews;
