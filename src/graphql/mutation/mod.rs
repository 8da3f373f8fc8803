//! GraphQL mutations
//!
//! Root mutation fields execute serially in document order, so a
//! createUser followed by a signinUser in one document sees the new
//! account.

mod auth;
mod link;
mod vote;

pub use auth::AuthMutation;
pub use link::LinkMutation;
pub use vote::VoteMutation;

use async_graphql::MergedObject;

/// Root mutation type
#[derive(MergedObject, Default)]
pub struct Mutation(AuthMutation, LinkMutation, VoteMutation);
