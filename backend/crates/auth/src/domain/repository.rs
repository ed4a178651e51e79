//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::{Email, UserId};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user together with an empty seller profile.
    ///
    /// Must be atomic: either both rows exist afterwards or neither does.
    /// A duplicate email must surface as [`crate::AuthError::EmailTaken`],
    /// not as a generic database error, so the register flow stays correct
    /// under concurrent sign-ups.
    async fn create_with_profile(&self, user: &User) -> AuthResult<()>;

    /// Find user by email, including the password hash
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Check if an email is already registered
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;
}
