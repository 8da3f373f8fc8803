//! Account mutations: createUser and signinUser

use async_graphql::{Context, Object, Result};

use crate::error::ApiError;
use crate::graphql::types::{AuthData, AuthPayload, User};
use crate::services::AuthService;

/// Sanitize auth errors to prevent information disclosure
///
/// Credential failures never reveal whether the email exists; everything
/// unexpected is logged server-side and replaced with a generic message.
fn sanitize_auth_error(error: &ApiError) -> async_graphql::Error {
    match error {
        ApiError::InvalidCredentials => async_graphql::Error::new("Invalid credentials"),
        ApiError::Conflict { .. } => async_graphql::Error::new("Email already registered"),
        _ => {
            tracing::error!(error = %error, "Internal auth error");
            async_graphql::Error::new("An unexpected error occurred")
        }
    }
}

/// Mutations for account creation and sign-in
#[derive(Default)]
pub struct AuthMutation;

#[Object]
impl AuthMutation {
    /// Create a new user account
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        name: String,
        auth_provider: AuthData,
    ) -> Result<User> {
        let auth = ctx.data::<AuthService>()?;
        let user = auth
            .register(&name, &auth_provider.email, &auth_provider.password)
            .await
            .map_err(|e| sanitize_auth_error(&e))?;
        Ok(User::from(user))
    }

    /// Verify credentials and return a bearer token with the signed-in user
    async fn signin_user(&self, ctx: &Context<'_>, auth: AuthData) -> Result<AuthPayload> {
        let auth_service = ctx.data::<AuthService>()?;
        let user = auth_service
            .sign_in(&auth.email, &auth.password)
            .await
            .map_err(|e| sanitize_auth_error(&e))?;
        Ok(AuthPayload {
            token: user.id.to_string(),
            user: User::from(user),
        })
    }
}
