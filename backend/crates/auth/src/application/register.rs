//! Register Use Case
//!
//! Creates a new seller account: validate input, reject duplicate emails,
//! hash the password, create the user with an empty seller profile in one
//! atomic operation, and issue a session token.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::token::{IdentityClaim, TokenService};
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{Email, UserId};
use crate::error::{AuthError, AuthResult};

/// The 400 message shared by register and login when a field is missing.
pub(crate) const MISSING_FIELDS: &str = "Email and password are required.";

/// Public view of a user. The password hash has no representation here.
#[derive(Debug, Clone)]
pub struct PublicUser {
    pub id: UserId,
    pub name: Option<String>,
    pub email: String,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.user_id,
            name: user.name.clone(),
            email: user.email.as_str().to_string(),
        }
    }
}

/// Register input
pub struct RegisterInput {
    pub name: Option<String>,
    pub email: String,
    pub password: String,
}

/// Output shared by register and login: the public user plus the session
/// token destined for the cookie.
#[derive(Debug)]
pub struct AuthOutput {
    pub user: PublicUser,
    pub session_token: String,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: TokenService,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, tokens: TokenService) -> Self {
        Self { user_repo, tokens }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<AuthOutput> {
        if input.email.trim().is_empty() || input.password.is_empty() {
            return Err(AuthError::Validation(MISSING_FIELDS.to_string()));
        }

        let email = Email::new(input.email)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;

        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        let password = ClearTextPassword::new(input.password)
            .map_err(|_| AuthError::Validation(MISSING_FIELDS.to_string()))?;
        let password_hash = password.hash()?;

        let name = input
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        let user = User::new(name, email, password_hash);

        // Atomic: user plus empty seller profile. The repository also turns
        // a lost uniqueness race into EmailTaken.
        self.user_repo.create_with_profile(&user).await?;

        let claim = IdentityClaim {
            id: user.user_id,
            email: user.email.as_str().to_string(),
        };
        let session_token = self.tokens.issue(&claim);

        tracing::info!(user_id = %user.user_id, "User registered");

        Ok(AuthOutput {
            user: PublicUser::from(&user),
            session_token,
        })
    }
}
