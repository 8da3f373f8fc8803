//! Link mutations

use async_graphql::{Context, Object, Result};

use crate::graphql::types::Link;
use crate::models::NewLink;
use crate::repositories::Stores;
use crate::services::CurrentUser;

/// Mutations for posting links
#[derive(Default)]
pub struct LinkMutation;

#[Object]
impl LinkMutation {
    /// Post a new link
    ///
    /// The poster is attributed only when the request carried a resolvable
    /// bearer token; anonymous posts are valid and have a null postedBy.
    async fn create_link(
        &self,
        ctx: &Context<'_>,
        url: String,
        description: String,
    ) -> Result<Link> {
        let stores = ctx.data::<Stores>()?;
        let posted_by = ctx.data_opt::<CurrentUser>().map(|current| current.0.id);

        let link = stores
            .links
            .insert(NewLink {
                url,
                description,
                posted_by,
            })
            .await?;

        tracing::info!(link_id = %link.id, attributed = posted_by.is_some(), "Link created");
        Ok(Link::from(link))
    }
}
