//! Vote store trait and Postgres implementation

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::{NewVote, Vote};

/// Storage interface for votes
#[async_trait]
pub trait VoteStore: Send + Sync {
    /// Find the votes for many links in one call, keyed by link id
    ///
    /// Every requested link id gets an entry, empty when the link has no
    /// votes.
    async fn find_by_link_ids(
        &self,
        link_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<Vote>>, StoreError>;

    /// Insert a new vote; the store assigns the creation timestamp
    async fn insert(&self, vote: NewVote) -> Result<Vote, StoreError>;
}

/// Postgres-backed vote store
#[derive(Clone)]
pub struct PgVoteStore {
    pool: PgPool,
}

impl PgVoteStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const VOTE_COLUMNS: &str = "id, created_at, user_id, link_id";

#[async_trait]
impl VoteStore for PgVoteStore {
    async fn find_by_link_ids(
        &self,
        link_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<Vote>>, StoreError> {
        let sql = format!(
            "SELECT {VOTE_COLUMNS} FROM votes WHERE link_id = ANY($1) \
             ORDER BY link_id, created_at"
        );
        let votes = sqlx::query_as::<_, Vote>(&sql)
            .bind(link_ids)
            .fetch_all(&self.pool)
            .await?;

        let mut result: HashMap<Uuid, Vec<Vote>> = HashMap::new();
        for vote in votes {
            result.entry(vote.link_id).or_default().push(vote);
        }
        for link_id in link_ids {
            result.entry(*link_id).or_default();
        }
        Ok(result)
    }

    async fn insert(&self, vote: NewVote) -> Result<Vote, StoreError> {
        let sql = format!(
            "INSERT INTO votes (user_id, link_id) VALUES ($1, $2) RETURNING {VOTE_COLUMNS}"
        );
        let vote = sqlx::query_as::<_, Vote>(&sql)
            .bind(vote.user_id)
            .bind(vote.link_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(vote)
    }
}
