//! User GraphQL type

use async_graphql::Object;
use uuid::Uuid;

use crate::models::User as DbUser;

/// User account exposed via GraphQL
///
/// The password hash stays internal; only id, name and email are selectable.
pub struct User {
    inner: DbUser,
}

impl User {
    pub fn new(user: DbUser) -> Self {
        Self { inner: user }
    }
}

impl From<DbUser> for User {
    fn from(user: DbUser) -> Self {
        Self::new(user)
    }
}

#[Object]
impl User {
    /// Unique user identifier
    async fn id(&self) -> Uuid {
        self.inner.id
    }

    /// Display name
    async fn name(&self) -> &str {
        &self.inner.name
    }

    /// Email address
    async fn email(&self) -> &str {
        &self.inner.email
    }
}
