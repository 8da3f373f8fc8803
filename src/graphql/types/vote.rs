//! Vote GraphQL type

use async_graphql::dataloader::{DataLoader, HashMapCache};
use async_graphql::{Context, Object, Result};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::graphql::loaders::{LinkLoader, UserLoader};
use crate::models::Vote as DbVote;

use super::link::Link;
use super::user::User;

/// Vote exposed via GraphQL
pub struct Vote {
    inner: DbVote,
}

impl Vote {
    pub fn new(vote: DbVote) -> Self {
        Self { inner: vote }
    }
}

impl From<DbVote> for Vote {
    fn from(vote: DbVote) -> Self {
        Self::new(vote)
    }
}

#[Object]
impl Vote {
    /// Unique vote identifier
    async fn id(&self) -> Uuid {
        self.inner.id
    }

    /// Server-assigned creation timestamp
    async fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    /// User who cast the vote
    async fn user(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let loader = ctx.data::<DataLoader<UserLoader, HashMapCache>>()?;
        let user = loader.load_one(self.inner.user_id).await?;
        Ok(user.map(User::from))
    }

    /// Link the vote was cast on
    async fn link(&self, ctx: &Context<'_>) -> Result<Option<Link>> {
        let loader = ctx.data::<DataLoader<LinkLoader, HashMapCache>>()?;
        let link = loader.load_one(self.inner.link_id).await?;
        Ok(link.map(Link::from))
    }
}
