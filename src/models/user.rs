//! User account model

use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// User account from the users table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    /// Unique user identifier; also serves as the bearer token value
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Email address (unique, stored lowercased)
    pub email: String,

    /// Argon2 hashed password
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// Payload for inserting a new user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
