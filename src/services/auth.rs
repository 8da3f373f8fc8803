//! Authentication service
//!
//! This module provides:
//! - resolution of bearer tokens to users (the per-request authentication
//!   gate; a token that does not resolve downgrades the request to
//!   unauthenticated instead of rejecting it)
//! - user registration with Argon2id password hashing
//! - sign-in with credential verification
//!
//! The bearer token is the user id itself: it deterministically maps back to
//! one user and needs no extra state.

use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::models::{NewUser, User};
use crate::repositories::UserStore;

/// The authenticated caller, injected into the GraphQL request context by
/// the HTTP handler when the bearer token resolves to a user
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Authentication service providing token resolution, registration and
/// sign-in
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    argon2: Argon2<'static>,
    /// Pre-computed hash verified when the email lookup misses, so sign-in
    /// timing does not reveal whether an account exists
    dummy_password_hash: String,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        let argon2 = Argon2::default();

        let dummy_salt = SaltString::generate(&mut OsRng);
        let dummy_password_hash = argon2
            .hash_password(b"dummy_password_for_timing_equalization", &dummy_salt)
            .expect("dummy password hashing should not fail")
            .to_string();

        Self {
            users,
            argon2,
            dummy_password_hash,
        }
    }

    /// Resolve the raw `Authorization` header value to a user
    ///
    /// Strips a literal `Bearer ` prefix if present and treats the remainder
    /// as an opaque token. Any failure along the way (missing header,
    /// unparsable token, unknown user, store error during lookup) yields
    /// `None`: unauthenticated queries are valid, so a bad token must not
    /// reject the request.
    pub async fn resolve_bearer(&self, authorization: Option<&str>) -> Option<User> {
        let raw = authorization?;
        let token = raw.strip_prefix("Bearer ").unwrap_or(raw).trim();
        if token.is_empty() {
            return None;
        }

        let user_id = match Uuid::parse_str(token) {
            Ok(id) => id,
            Err(_) => {
                tracing::debug!("Bearer token is not a user id, proceeding unauthenticated");
                return None;
            }
        };

        match self.users.find_by_id(user_id).await {
            Ok(Some(user)) => Some(user),
            Ok(None) => {
                tracing::debug!(%user_id, "Bearer token matches no user, proceeding unauthenticated");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "User lookup failed during authentication");
                None
            }
        }
    }

    /// Register a new user account
    ///
    /// The email must not already be registered; the password is stored as
    /// an Argon2id hash.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> ApiResult<User> {
        if self.users.find_by_email(email).await?.is_some() {
            return Err(ApiError::conflict("user", email));
        }

        let password_hash = self.hash_password(password)?;
        let user = self
            .users
            .insert(NewUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Verify credentials and return the signed-in user
    ///
    /// Unknown email and wrong password both map to `InvalidCredentials`,
    /// and both take one password verification.
    pub async fn sign_in(&self, email: &str, password: &str) -> ApiResult<User> {
        match self.users.find_by_email(email).await? {
            Some(user) => {
                if self.verify_password(password, &user.password_hash)? {
                    Ok(user)
                } else {
                    Err(ApiError::InvalidCredentials)
                }
            }
            None => {
                let _ = self.verify_password(password, &self.dummy_password_hash);
                Err(ApiError::InvalidCredentials)
            }
        }
    }

    /// Hash a password with Argon2id
    fn hash_password(&self, password: &str) -> ApiResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| ApiError::Internal(format!("Password hashing failed: {e}")))?;
        Ok(hash.to_string())
    }

    /// Verify a password against an Argon2id hash
    fn verify_password(&self, password: &str, hash: &str) -> ApiResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| ApiError::Internal(format!("Invalid password hash format: {e}")))?;
        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MemoryStore;
    use assert_matches::assert_matches;

    fn service() -> (AuthService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (AuthService::new(store.clone()), store)
    }

    #[tokio::test]
    async fn missing_header_is_unauthenticated() {
        let (auth, _) = service();
        assert!(auth.resolve_bearer(None).await.is_none());
    }

    #[tokio::test]
    async fn garbage_token_downgrades_silently() {
        let (auth, _) = service();
        assert!(auth.resolve_bearer(Some("Bearer not-a-uuid")).await.is_none());
        assert!(auth.resolve_bearer(Some("Bearer ")).await.is_none());
    }

    #[tokio::test]
    async fn unknown_user_id_downgrades_silently() {
        let (auth, _) = service();
        let token = Uuid::new_v4().to_string();
        assert!(auth.resolve_bearer(Some(&token)).await.is_none());
    }

    #[tokio::test]
    async fn valid_token_resolves_with_or_without_bearer_prefix() {
        let (auth, _) = service();
        let user = auth.register("alice", "alice@example.com", "hunter2").await.unwrap();

        let with_prefix = format!("Bearer {}", user.id);
        assert_eq!(
            auth.resolve_bearer(Some(&with_prefix)).await.unwrap().id,
            user.id
        );
        let bare = user.id.to_string();
        assert_eq!(auth.resolve_bearer(Some(&bare)).await.unwrap().id, user.id);
    }

    #[tokio::test]
    async fn sign_in_verifies_password() {
        let (auth, _) = service();
        auth.register("bob", "bob@example.com", "correct-horse").await.unwrap();

        let user = auth.sign_in("bob@example.com", "correct-horse").await.unwrap();
        assert_eq!(user.email, "bob@example.com");

        let err = auth.sign_in("bob@example.com", "wrong").await.unwrap_err();
        assert_matches!(err, ApiError::InvalidCredentials);

        let err = auth.sign_in("nobody@example.com", "whatever").await.unwrap_err();
        assert_matches!(err, ApiError::InvalidCredentials);
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let (auth, _) = service();
        auth.register("carol", "carol@example.com", "pw").await.unwrap();
        let err = auth.register("carol2", "carol@example.com", "pw").await.unwrap_err();
        assert_matches!(err, ApiError::Conflict { .. });
    }
}
