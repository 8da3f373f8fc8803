//! User DataLoader for batched fetching
//!
//! Batches the user lookups issued by `Link.postedBy` and `Vote.user`
//! within one request into a single `find_by_ids` store call. Both field
//! paths share this loader, so they also share its batch and per-request
//! cache.

use std::collections::HashMap;
use std::sync::Arc;

use async_graphql::dataloader::Loader;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::User;
use crate::repositories::UserStore;

/// DataLoader for batching user queries
#[derive(Clone)]
pub struct UserLoader {
    users: Arc<dyn UserStore>,
}

impl UserLoader {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }
}

impl Loader<Uuid> for UserLoader {
    type Value = User;
    type Error = Arc<StoreError>;

    async fn load(&self, keys: &[Uuid]) -> Result<HashMap<Uuid, Self::Value>, Self::Error> {
        tracing::debug!(ids = keys.len(), "Flushing batched user lookup");
        self.users.find_by_ids(keys).await.map_err(Arc::new)
    }
}
