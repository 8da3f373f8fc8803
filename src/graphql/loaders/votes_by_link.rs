//! Votes-by-Link DataLoader for batched fetching
//!
//! Collection loader: given many link ids, fetches all their votes in one
//! store call and redistributes them grouped by link id. Links with no
//! votes resolve to an empty list rather than a missing entry.

use std::collections::HashMap;
use std::sync::Arc;

use async_graphql::dataloader::Loader;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::Vote;
use crate::repositories::VoteStore;

/// DataLoader for batching votes-by-link queries
#[derive(Clone)]
pub struct VotesByLinkLoader {
    votes: Arc<dyn VoteStore>,
}

impl VotesByLinkLoader {
    pub fn new(votes: Arc<dyn VoteStore>) -> Self {
        Self { votes }
    }
}

impl Loader<Uuid> for VotesByLinkLoader {
    type Value = Vec<Vote>;
    type Error = Arc<StoreError>;

    async fn load(&self, keys: &[Uuid]) -> Result<HashMap<Uuid, Self::Value>, Self::Error> {
        // Guard against empty keys to avoid an unnecessary store call
        if keys.is_empty() {
            return Ok(HashMap::new());
        }

        tracing::debug!(ids = keys.len(), "Flushing batched votes-by-link lookup");
        self.votes.find_by_link_ids(keys).await.map_err(Arc::new)
    }
}
