//! Authentication GraphQL types

use async_graphql::{InputObject, SimpleObject};

use super::user::User;

/// Email/password credentials, used by both createUser and signinUser
#[derive(Debug, InputObject)]
pub struct AuthData {
    /// Email address
    pub email: String,
    /// Plaintext password
    pub password: String,
}

/// Result of a successful sign-in
#[derive(SimpleObject)]
pub struct AuthPayload {
    /// Bearer token for subsequent requests (the user id)
    pub token: String,
    /// The signed-in user
    pub user: User,
}
