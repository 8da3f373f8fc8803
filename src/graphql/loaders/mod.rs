//! DataLoader implementations for GraphQL
//!
//! These loaders coalesce the associated-entity lookups issued by many
//! resolvers within one request into a single batched store call, solving
//! the N+1 query problem: "N links, each with its poster" costs one
//! `find_by_ids` call, not N.
//!
//! Unlike a process-wide cache, every `DataLoader` instance here is created
//! per request (see `crate::graphql::schema::attach_request_loaders`) and
//! discarded with it. Within that request the `HashMapCache` guarantees an
//! id resolved by an earlier flush is never fetched again, even from a
//! different field path.
//!
//! Two shapes of loader:
//! - Single-entity loaders return one entity per id (`UserLoader`,
//!   `LinkLoader`)
//! - Collection loaders return all children of a parent id
//!   (`VotesByLinkLoader`)

mod link;
mod user;
mod votes_by_link;

pub use link::LinkLoader;
pub use user::UserLoader;
pub use votes_by_link::VotesByLinkLoader;
