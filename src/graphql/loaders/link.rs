//! Link DataLoader for batched fetching
//!
//! Batches the link lookups issued by `Vote.link` resolvers within one
//! request into a single `find_by_ids` store call.

use std::collections::HashMap;
use std::sync::Arc;

use async_graphql::dataloader::Loader;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::Link;
use crate::repositories::LinkStore;

/// DataLoader for batching link queries
#[derive(Clone)]
pub struct LinkLoader {
    links: Arc<dyn LinkStore>,
}

impl LinkLoader {
    pub fn new(links: Arc<dyn LinkStore>) -> Self {
        Self { links }
    }
}

impl Loader<Uuid> for LinkLoader {
    type Value = Link;
    type Error = Arc<StoreError>;

    async fn load(&self, keys: &[Uuid]) -> Result<HashMap<Uuid, Self::Value>, Self::Error> {
        tracing::debug!(ids = keys.len(), "Flushing batched link lookup");
        self.links.find_by_ids(keys).await.map_err(Arc::new)
    }
}
