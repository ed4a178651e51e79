//! User Entity
//!
//! A registered seller account. The password never appears here in clear
//! text; only the Argon2id PHC hash is carried, and it is never serialized
//! into any response DTO.

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;

use crate::domain::value_object::{Email, UserId};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Display name (optional at registration)
    pub name: Option<String>,
    /// Email address (unique, used for login)
    pub email: Email,
    /// Argon2id hash of the password, PHC format
    pub password_hash: HashedPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(name: Option<String>, email: Email, password_hash: HashedPassword) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            name,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::ClearTextPassword;

    #[test]
    fn test_new_user_gets_fresh_id() {
        let hash = ClearTextPassword::new("a password".into())
            .unwrap()
            .hash()
            .unwrap();
        let a = User::new(None, Email::new("a@example.com").unwrap(), hash.clone());
        let b = User::new(None, Email::new("b@example.com").unwrap(), hash);
        assert_ne!(a.user_id, b.user_id);
        assert_eq!(a.created_at, a.updated_at);
    }
}
