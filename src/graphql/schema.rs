//! GraphQL schema construction and per-request loader wiring

use async_graphql::dataloader::{DataLoader, HashMapCache};
use async_graphql::{EmptySubscription, Request, Schema};

use crate::repositories::Stores;
use crate::services::AuthService;

use super::loaders::{LinkLoader, UserLoader, VotesByLinkLoader};
use super::mutation::Mutation;
use super::query::Query;

/// The hackernews GraphQL schema type
pub type HackerNewsSchema = Schema<Query, Mutation, EmptySubscription>;

/// Builder for constructing the GraphQL schema with required services
pub struct SchemaBuilder {
    stores: Option<Stores>,
    auth_service: Option<AuthService>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self {
            stores: None,
            auth_service: None,
        }
    }

    /// Set the entity stores
    pub fn stores(mut self, stores: Stores) -> Self {
        self.stores = Some(stores);
        self
    }

    /// Set the auth service
    pub fn auth_service(mut self, auth_service: AuthService) -> Self {
        self.auth_service = Some(auth_service);
        self
    }

    /// Build the schema with all configured services
    ///
    /// # Panics
    /// Panics if stores or auth_service are not configured
    pub fn build(self) -> HackerNewsSchema {
        let stores = self.stores.expect("entity stores are required");
        let auth_service = self.auth_service.expect("auth service is required");

        Schema::build(Query::default(), Mutation::default(), EmptySubscription)
            .data(stores)
            .data(auth_service)
            .finish()
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a new GraphQL schema with the provided services
pub fn build_schema(stores: Stores, auth_service: AuthService) -> HackerNewsSchema {
    SchemaBuilder::new()
        .stores(stores)
        .auth_service(auth_service)
        .build()
}

/// Attach fresh DataLoader instances to a request
///
/// The loaders (and their caches) are scoped to this one request: they are
/// created here, travel in the request's context data, and are dropped when
/// the response has been composed. Nothing batched or cached ever leaks
/// across requests.
pub fn attach_request_loaders(request: Request, stores: &Stores) -> Request {
    request
        .data(DataLoader::with_cache(
            UserLoader::new(stores.users.clone()),
            tokio::spawn,
            HashMapCache::default(),
        ))
        .data(DataLoader::with_cache(
            LinkLoader::new(stores.links.clone()),
            tokio::spawn,
            HashMapCache::default(),
        ))
        .data(DataLoader::with_cache(
            VotesByLinkLoader::new(stores.votes.clone()),
            tokio::spawn,
            HashMapCache::default(),
        ))
}
