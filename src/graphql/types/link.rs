//! Link GraphQL type and listing filter input

use async_graphql::dataloader::{DataLoader, HashMapCache};
use async_graphql::{Context, InputObject, Object, Result};
use uuid::Uuid;

use crate::graphql::loaders::{UserLoader, VotesByLinkLoader};
use crate::models::{Link as DbLink, LinkFilter};

use super::user::User;
use super::vote::Vote;

/// Substring filter for `allLinks`
///
/// Field names keep the original wire format (`description_contains`,
/// `url_contains`) rather than the camelCase default.
#[derive(Debug, InputObject)]
#[graphql(name = "LinkFilter")]
pub struct LinkFilterInput {
    /// Match links whose description contains this substring
    #[graphql(name = "description_contains")]
    pub description_contains: Option<String>,

    /// Match links whose URL contains this substring
    #[graphql(name = "url_contains")]
    pub url_contains: Option<String>,
}

impl From<LinkFilterInput> for LinkFilter {
    fn from(input: LinkFilterInput) -> Self {
        Self {
            description_contains: input.description_contains,
            url_contains: input.url_contains,
        }
    }
}

/// Posted link exposed via GraphQL
pub struct Link {
    inner: DbLink,
}

impl Link {
    pub fn new(link: DbLink) -> Self {
        Self { inner: link }
    }
}

impl From<DbLink> for Link {
    fn from(link: DbLink) -> Self {
        Self::new(link)
    }
}

#[Object]
impl Link {
    /// Unique link identifier
    async fn id(&self) -> Uuid {
        self.inner.id
    }

    /// Target URL
    async fn url(&self) -> &str {
        &self.inner.url
    }

    /// Short description
    async fn description(&self) -> &str {
        &self.inner.description
    }

    // Relationship resolvers (using DataLoader for batched fetching)

    /// User who posted this link, null for anonymous posts
    async fn posted_by(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        if let Some(user_id) = self.inner.posted_by {
            let loader = ctx.data::<DataLoader<UserLoader, HashMapCache>>()?;
            let user = loader.load_one(user_id).await?;
            Ok(user.map(User::from))
        } else {
            // Null foreign key resolves without touching the loader
            Ok(None)
        }
    }

    /// Votes cast on this link
    async fn votes(&self, ctx: &Context<'_>) -> Result<Vec<Vote>> {
        let loader = ctx.data::<DataLoader<VotesByLinkLoader, HashMapCache>>()?;
        let votes = loader.load_one(self.inner.id).await?.unwrap_or_default();
        Ok(votes.into_iter().map(Vote::from).collect())
    }
}
