//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod login;
pub mod register;
pub mod session;
pub mod token;

// Re-exports
pub use config::AuthConfig;
pub use login::{LoginInput, LoginUseCase};
pub use register::{AuthOutput, PublicUser, RegisterInput, RegisterUseCase};
pub use session::SessionResolver;
pub use token::{IdentityClaim, TokenService};
