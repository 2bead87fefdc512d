//! Shared types: user rows from the application's user table and promotion requests.

pub mod ids;
pub mod request;
pub mod user;

pub use ids::UserId;
pub use request::{parse_requests, PromotionRequest};
pub use user::UserRecord;
