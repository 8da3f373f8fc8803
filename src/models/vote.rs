//! Vote model

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// An upvote on a link, immutable once created
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vote {
    /// Unique vote identifier
    pub id: Uuid,

    /// Server-assigned creation timestamp (UTC)
    pub created_at: DateTime<Utc>,

    /// User who cast the vote
    pub user_id: Uuid,

    /// Link the vote was cast on
    pub link_id: Uuid,
}

/// Payload for inserting a new vote; the timestamp is assigned by the store
#[derive(Debug, Clone)]
pub struct NewVote {
    pub user_id: Uuid,
    pub link_id: Uuid,
}
