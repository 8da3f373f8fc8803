//! Service layer

pub mod auth;

pub use auth::{AuthService, CurrentUser};
