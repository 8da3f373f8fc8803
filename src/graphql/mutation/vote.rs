//! Vote mutations

use async_graphql::{Context, Object, Result};
use uuid::Uuid;

use crate::graphql::types::Vote;
use crate::models::NewVote;
use crate::repositories::Stores;

/// Mutations for voting on links
#[derive(Default)]
pub struct VoteMutation;

#[Object]
impl VoteMutation {
    /// Cast a vote on a link; the creation timestamp is server-assigned
    async fn create_vote(
        &self,
        ctx: &Context<'_>,
        user_id: Uuid,
        link_id: Uuid,
    ) -> Result<Vote> {
        let stores = ctx.data::<Stores>()?;
        let vote = stores.votes.insert(NewVote { user_id, link_id }).await?;
        Ok(Vote::from(vote))
    }
}
