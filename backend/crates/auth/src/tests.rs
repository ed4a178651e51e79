//! Unit tests for the auth use cases, run against an in-memory repository.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use platform::password::ClearTextPassword;

use crate::application::token::TokenService;
use crate::application::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{Email, UserId};
use crate::error::{AuthError, AuthResult};

// ============================================================================
// In-memory repository
// ============================================================================

/// Profile row as the marketplace schema stores it. Sign-up creates it
/// empty; only the profile editor fills it in.
#[derive(Clone)]
struct ProfileRow {
    user_id: UserId,
    bio: Option<String>,
    story: Option<String>,
    profile_pic_url: Option<String>,
}

#[derive(Clone, Default)]
struct MemoryUserRepo {
    users: Arc<Mutex<Vec<User>>>,
    profiles: Arc<Mutex<Vec<ProfileRow>>>,
}

impl MemoryUserRepo {
    fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    fn profile_of(&self, user_id: &UserId) -> Option<ProfileRow> {
        self.profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| &p.user_id == user_id)
            .cloned()
    }

    fn seed(&self, name: Option<&str>, email: &str, password: &str) -> User {
        let hash = ClearTextPassword::new(password.to_string())
            .unwrap()
            .hash()
            .unwrap();
        let user = User::new(
            name.map(str::to_string),
            Email::new(email).unwrap(),
            hash,
        );
        self.users.lock().unwrap().push(user.clone());
        user
    }
}

impl UserRepository for MemoryUserRepo {
    async fn create_with_profile(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(AuthError::EmailTaken);
        }
        users.push(user.clone());
        self.profiles.lock().unwrap().push(ProfileRow {
            user_id: user.user_id,
            bio: None,
            story: None,
            profile_pic_url: None,
        });
        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| &u.email == email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|u| &u.email == email))
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| &u.user_id == user_id)
            .cloned())
    }
}

fn tokens() -> TokenService {
    TokenService::new([42u8; 32], Duration::from_secs(7 * 24 * 3600))
}

// ============================================================================
// Register
// ============================================================================

#[tokio::test]
async fn register_creates_user_and_issues_verifiable_token() {
    let repo = MemoryUserRepo::default();
    let use_case = RegisterUseCase::new(Arc::new(repo.clone()), tokens());

    let output = use_case
        .execute(RegisterInput {
            name: Some("  Maria  ".to_string()),
            email: " Maria@Example.com ".to_string(),
            password: "handcrafted123".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(repo.len(), 1);
    assert_eq!(output.user.email, "maria@example.com");
    assert_eq!(output.user.name.as_deref(), Some("Maria"));

    // Sign-up creates the seller profile alongside the user, still blank
    let profile = repo.profile_of(&output.user.id).unwrap();
    assert!(profile.bio.is_none());
    assert!(profile.story.is_none());
    assert!(profile.profile_pic_url.is_none());

    let claim = tokens().verify(&output.session_token).unwrap();
    assert_eq!(claim.id, output.user.id);
    assert_eq!(claim.email, "maria@example.com");
}

#[tokio::test]
async fn register_duplicate_email_is_conflict_and_creates_nothing() {
    let repo = MemoryUserRepo::default();
    repo.seed(None, "taken@example.com", "first-password");

    let use_case = RegisterUseCase::new(Arc::new(repo.clone()), tokens());

    let result = use_case
        .execute(RegisterInput {
            name: None,
            email: "taken@example.com".to_string(),
            password: "second-password".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AuthError::EmailTaken)));
    assert_eq!(repo.len(), 1);
    // The failed sign-up left no stray profile behind either
    assert_eq!(repo.profiles.lock().unwrap().len(), 0);
}

#[tokio::test]
async fn register_missing_fields_is_validation_error() {
    let repo = MemoryUserRepo::default();
    let use_case = RegisterUseCase::new(Arc::new(repo.clone()), tokens());

    for (email, password) in [("", "pw"), ("a@example.com", ""), ("  ", "pw")] {
        let result = use_case
            .execute(RegisterInput {
                name: None,
                email: email.to_string(),
                password: password.to_string(),
            })
            .await;

        match result {
            Err(AuthError::Validation(msg)) => {
                assert_eq!(msg, "Email and password are required.");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }
    assert_eq!(repo.len(), 0);
}

// ============================================================================
// Login
// ============================================================================

#[tokio::test]
async fn login_with_correct_credentials_succeeds() {
    let repo = MemoryUserRepo::default();
    let seeded = repo.seed(Some("Maria"), "maria@example.com", "handcrafted123");

    let use_case = LoginUseCase::new(Arc::new(repo), tokens());

    let output = use_case
        .execute(LoginInput {
            email: "maria@example.com".to_string(),
            password: "handcrafted123".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(output.user.id, seeded.user_id);

    let claim = tokens().verify(&output.session_token).unwrap();
    assert_eq!(claim.id, seeded.user_id);
}

#[tokio::test]
async fn login_failures_are_enumeration_safe() {
    let repo = MemoryUserRepo::default();
    repo.seed(None, "maria@example.com", "handcrafted123");

    let use_case = LoginUseCase::new(Arc::new(repo), tokens());

    let wrong_password = use_case
        .execute(LoginInput {
            email: "maria@example.com".to_string(),
            password: "not-the-password".to_string(),
        })
        .await
        .unwrap_err();

    let unknown_email = use_case
        .execute(LoginInput {
            email: "nobody@example.com".to_string(),
            password: "handcrafted123".to_string(),
        })
        .await
        .unwrap_err();

    // Byte-identical client-facing message and identical status code
    assert_eq!(
        wrong_password.to_app_error().message(),
        unknown_email.to_app_error().message()
    );
    assert_eq!(
        wrong_password.status_code(),
        unknown_email.status_code()
    );
    assert_eq!(wrong_password.status_code().as_u16(), 401);
}

#[tokio::test]
async fn login_missing_fields_is_validation_error() {
    let repo = MemoryUserRepo::default();
    let use_case = LoginUseCase::new(Arc::new(repo), tokens());

    let result = use_case
        .execute(LoginInput {
            email: String::new(),
            password: String::new(),
        })
        .await;

    assert!(matches!(result, Err(AuthError::Validation(_))));
}
