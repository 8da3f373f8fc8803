//! Entity store layer
//!
//! The resolution engine only ever talks to the stores through the
//! `LinkStore` / `UserStore` / `VoteStore` traits, so the Postgres-backed
//! implementations can be swapped for the in-memory one in tests. This
//! pattern:
//! - keeps all SQL in one place per entity
//! - makes the batching behavior observable (the in-memory store records
//!   every `find_by_ids` call)
//! - keeps the GraphQL layer free of storage details

pub mod link;
pub mod memory;
pub mod user;
pub mod vote;

use std::sync::Arc;

pub use link::{LinkStore, PgLinkStore};
pub use memory::MemoryStore;
pub use user::{PgUserStore, UserStore};
pub use vote::{PgVoteStore, VoteStore};

use sqlx::PgPool;

/// Container bundling one store handle per entity kind
///
/// Cloning is cheap; the handles share the underlying connection pool (or
/// in-memory state). Injected into the GraphQL schema once at startup and
/// read by resolvers, loaders are built from it per request.
#[derive(Clone)]
pub struct Stores {
    pub links: Arc<dyn LinkStore>,
    pub users: Arc<dyn UserStore>,
    pub votes: Arc<dyn VoteStore>,
}

impl Stores {
    /// Postgres-backed stores over a shared connection pool
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            links: Arc::new(PgLinkStore::new(pool.clone())),
            users: Arc::new(PgUserStore::new(pool.clone())),
            votes: Arc::new(PgVoteStore::new(pool)),
        }
    }

    /// All three stores served by a single in-memory instance
    pub fn in_memory(store: Arc<MemoryStore>) -> Self {
        Self {
            links: store.clone(),
            users: store.clone(),
            votes: store,
        }
    }
}
