//! Login Use Case
//!
//! Authenticates a user by email and password. Unknown email and wrong
//! password are indistinguishable from the outside: same error variant,
//! same message, same status code.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::register::{AuthOutput, MISSING_FIELDS, PublicUser};
use crate::application::token::{IdentityClaim, TokenService};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::Email;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: TokenService,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, tokens: TokenService) -> Self {
        Self { user_repo, tokens }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<AuthOutput> {
        if input.email.trim().is_empty() || input.password.is_empty() {
            return Err(AuthError::Validation(MISSING_FIELDS.to_string()));
        }

        // A malformed email cannot belong to any account; fail the same
        // way as an unknown one.
        let email =
            Email::new(input.email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password = ClearTextPassword::new(input.password)
            .map_err(|_| AuthError::InvalidCredentials)?;

        if !user.password_hash.verify(&password) {
            return Err(AuthError::InvalidCredentials);
        }

        let claim = IdentityClaim {
            id: user.user_id,
            email: user.email.as_str().to_string(),
        };
        let session_token = self.tokens.issue(&claim);

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(AuthOutput {
            user: PublicUser::from(&user),
            session_token,
        })
    }
}
