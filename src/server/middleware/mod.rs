//! Request guards

mod auth;
mod helpers;

pub use auth::AdminIdentity;
pub use helpers::extract_bearer_token;
