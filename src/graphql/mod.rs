//! GraphQL schema and resolvers
//!
//! This module contains the async-graphql schema:
//! - Query resolvers for link listings
//! - Mutation resolvers for accounts, links and votes
//! - Type definitions for all GraphQL objects
//! - Per-request DataLoaders for batched associated-entity fetching

pub mod loaders;
pub mod mutation;
pub mod query;
pub mod schema;
pub mod types;

pub use schema::{attach_request_loaders, build_schema, HackerNewsSchema, SchemaBuilder};
