//! GraphQL type definitions
//!
//! Thin wrappers over the database models with relationship resolvers.
//! Foreign keys resolve through the per-request DataLoaders; scalar
//! coercion (uuid, RFC 3339 timestamps) happens here at the wire boundary,
//! never inside resolvers.

mod auth;
mod link;
mod user;
mod vote;

pub use auth::{AuthData, AuthPayload};
pub use link::{Link, LinkFilterInput};
pub use user::User;
pub use vote::Vote;
