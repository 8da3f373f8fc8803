//! GraphQL queries

mod link;

pub use link::LinkQuery;

use async_graphql::MergedObject;

/// Root query type
#[derive(MergedObject, Default)]
pub struct Query(LinkQuery);
