//! HTTP route handlers outside the GraphQL endpoint

pub mod health;

pub use health::{health_router, HealthState};
