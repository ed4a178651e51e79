//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - User register/login with email + password
//! - Stateless sessions: HMAC-SHA256 signed identity tokens carried in an
//!   HttpOnly cookie, expiring after 7 days
//! - Session resolution for protected routes (cookie -> identity or anonymous)
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (salted, fixed work factor)
//! - Login failures are enumeration-safe: unknown email and wrong password
//!   produce identical responses
//! - Token verification collapses tampering, malformed input, and expiry
//!   into a single "unauthenticated" outcome

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::session::SessionResolver;
pub use application::token::{IdentityClaim, TokenService};
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
