//! Hackernews-style GraphQL API library
//!
//! This module exposes the core API components for use in integration tests
//! and as a library.

pub mod config;
pub mod error;
pub mod graphql;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use error::{ApiError, ApiResult, ErrorResponse, StoreError};
pub use graphql::{attach_request_loaders, build_schema, HackerNewsSchema};
pub use services::{AuthService, CurrentUser};
