//! Token Service
//!
//! Issues and verifies compact, expiring identity tokens. A token is
//! `base64url(claims JSON) + "." + base64url(HMAC-SHA256 signature)`,
//! signed with the process-wide secret. Claims carry the user id, email,
//! and an expiry 7 days out (configurable).
//!
//! Verification collapses every failure mode - bad signature, malformed
//! payload, expired token - into [`AuthError::InvalidToken`], so handler
//! behavior cannot differ between tampering and expiry.

use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::value_object::UserId;
use crate::error::{AuthError, AuthResult};

/// The minimal payload embedded in a session token.
///
/// Claims are immutable once signed; changing a byte of the payload
/// invalidates the signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityClaim {
    /// User identifier
    pub id: UserId,
    /// Email address at issuance time
    pub email: String,
}

/// Wire format of the signed payload. `exp` is Unix seconds.
#[derive(Serialize, Deserialize)]
struct TokenClaims {
    id: Uuid,
    email: String,
    exp: i64,
}

/// Signs and verifies identity tokens with a symmetric secret.
#[derive(Clone)]
pub struct TokenService {
    secret: [u8; 32],
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: [u8; 32], ttl: Duration) -> Self {
        Self { secret, ttl }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.token_secret, config.token_ttl)
    }

    /// Sign a claim into a token expiring `ttl` from now.
    pub fn issue(&self, claim: &IdentityClaim) -> String {
        let claims = TokenClaims {
            id: claim.id.into_uuid(),
            email: claim.email.clone(),
            exp: Utc::now().timestamp() + self.ttl.as_secs() as i64,
        };

        let payload_json =
            serde_json::to_vec(&claims).expect("identity claims serialize to JSON");
        let payload = URL_SAFE_NO_PAD.encode(payload_json);

        let mut mac = Hmac::<Sha256>::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(payload.as_bytes());
        let signature = mac.finalize().into_bytes();

        format!("{}.{}", payload, URL_SAFE_NO_PAD.encode(signature))
    }

    /// Verify signature and expiry; return the embedded claim.
    pub fn verify(&self, token: &str) -> AuthResult<IdentityClaim> {
        let (payload, signature_b64) =
            token.split_once('.').ok_or(AuthError::InvalidToken)?;

        // Signature first, before touching the payload
        let mut mac = Hmac::<Sha256>::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(payload.as_bytes());

        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| AuthError::InvalidToken)?;

        mac.verify_slice(&signature)
            .map_err(|_| AuthError::InvalidToken)?;

        let payload_json = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| AuthError::InvalidToken)?;

        let claims: TokenClaims =
            serde_json::from_slice(&payload_json).map_err(|_| AuthError::InvalidToken)?;

        if claims.exp <= Utc::now().timestamp() {
            return Err(AuthError::InvalidToken);
        }

        Ok(IdentityClaim {
            id: UserId::from_uuid(claims.id),
            email: claims.email,
        })
    }
}
