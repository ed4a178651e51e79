//! API DTOs (Data Transfer Objects)
//!
//! Request bodies use `Option` for required fields on purpose: presence is
//! validated explicitly so a missing field is a 400 with the documented
//! message, not a deserialization 422.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::register::PublicUser;
use crate::application::token::IdentityClaim;

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

/// Public user fields. Never carries the password hash.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: String,
}

impl From<PublicUser> for UserDto {
    fn from(user: PublicUser) -> Self {
        Self {
            id: user.id.into_uuid(),
            name: user.name,
            email: user.email,
        }
    }
}

/// Register/login response
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub user: UserDto,
}

/// "Who am I" response. Always 200; `user` is null when anonymous.
#[derive(Debug, Clone, Serialize)]
pub struct MeResponse {
    pub user: Option<IdentityClaim>,
}
