//! Link query resolvers

use async_graphql::{Context, Object, Result};

use crate::graphql::types::{Link, LinkFilterInput};
use crate::models::LinkFilter;
use crate::repositories::Stores;

/// Queries over posted links
#[derive(Default)]
pub struct LinkQuery;

#[Object]
impl LinkQuery {
    /// All posted links in posting order, optionally filtered by substring
    /// and paginated with skip/first
    async fn all_links(
        &self,
        ctx: &Context<'_>,
        filter: Option<LinkFilterInput>,
        skip: Option<i32>,
        first: Option<i32>,
    ) -> Result<Vec<Link>> {
        let stores = ctx.data::<Stores>()?;
        let filter: Option<LinkFilter> = filter.map(Into::into);

        let links = stores
            .links
            .find_all(
                filter.as_ref(),
                skip.unwrap_or(0).max(0) as i64,
                first.map(|n| n.max(0) as i64),
            )
            .await?;

        Ok(links.into_iter().map(Link::from).collect())
    }
}
