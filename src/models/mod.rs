//! Database models for the link aggregator
//!
//! Plain data carriers shared by the repositories and the GraphQL layer.
//! GraphQL-facing wrappers live in `crate::graphql::types`.

pub mod link;
pub mod user;
pub mod vote;

pub use link::{Link, LinkFilter, NewLink};
pub use user::{NewUser, User};
pub use vote::{NewVote, Vote};
