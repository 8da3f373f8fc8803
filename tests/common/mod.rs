//! Common test utilities for API integration tests
//!
//! Builds a schema over the in-memory store and executes documents against
//! it the way the HTTP handler does: fresh per-request DataLoaders and an
//! optional authenticated caller in the context data.

#![allow(dead_code)]

use std::sync::Arc;

use async_graphql::{Request, Response, Variables};

use hackernews_api::graphql::{attach_request_loaders, build_schema, HackerNewsSchema};
use hackernews_api::models::User;
use hackernews_api::repositories::{MemoryStore, Stores};
use hackernews_api::services::{AuthService, CurrentUser};

/// In-memory application under test
pub struct TestApp {
    pub schema: HackerNewsSchema,
    pub store: Arc<MemoryStore>,
    pub stores: Stores,
    pub auth: AuthService,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let stores = Stores::in_memory(store.clone());
        let auth = AuthService::new(stores.users.clone());
        let schema = build_schema(stores.clone(), auth.clone());
        Self {
            schema,
            store,
            stores,
            auth,
        }
    }

    /// Register a user through the auth service (hashed password included)
    pub async fn register(&self, name: &str, email: &str, password: &str) -> User {
        self.auth
            .register(name, email, password)
            .await
            .expect("test user registration should succeed")
    }

    /// Execute a document unauthenticated
    pub async fn execute(&self, query: &str) -> Response {
        self.run(Request::new(query)).await
    }

    /// Execute a document with variables
    pub async fn execute_with_vars(&self, query: &str, vars: serde_json::Value) -> Response {
        self.run(Request::new(query).variables(Variables::from_json(vars)))
            .await
    }

    /// Execute a document as an authenticated user
    pub async fn execute_as(&self, user: &User, query: &str) -> Response {
        self.run(Request::new(query).data(CurrentUser(user.clone())))
            .await
    }

    async fn run(&self, request: Request) -> Response {
        let request = attach_request_loaders(request, &self.stores);
        self.schema.execute(request).await
    }
}

/// Unwrap a response that must have succeeded and return its data as JSON
pub fn data(resp: Response) -> serde_json::Value {
    assert!(
        resp.errors.is_empty(),
        "unexpected GraphQL errors: {:?}",
        resp.errors
    );
    resp.data.into_json().expect("response data should be JSON")
}
