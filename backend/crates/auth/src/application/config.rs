//! Application Configuration
//!
//! Configuration for the Auth application layer. The signing secret is
//! process-wide, read-only configuration: it is loaded once at startup
//! (see `apps/api`) and never mutated afterwards. A missing secret is a
//! startup failure, never a per-request one.

use std::time::Duration;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;
use platform::cookie::CookieConfig;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Secret key for HMAC-SHA256 token signing (32 bytes)
    pub token_secret: [u8; 32],
    /// Token lifetime (7 days)
    pub token_ttl: Duration,
    /// Whether to require Secure cookie (off for local development)
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "token".to_string(),
            token_secret: [0u8; 32],
            token_ttl: Duration::from_secs(7 * 24 * 3600), // 7 days
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
        }
    }
}

impl AuthConfig {
    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            token_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Token lifetime in whole seconds
    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl.as_secs() as i64
    }

    /// Cookie settings for the session cookie
    pub fn cookie_config(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.token_ttl_secs()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.session_cookie_name, "token");
        assert_eq!(config.token_ttl_secs(), 7 * 24 * 3600);
        assert!(config.cookie_secure);
    }

    #[test]
    fn test_development_has_random_secret() {
        let config = AuthConfig::development();
        assert!(!config.cookie_secure);
        assert_ne!(config.token_secret, [0u8; 32]);
    }

    #[test]
    fn test_cookie_config_matches_ttl() {
        let config = AuthConfig::default();
        let cookie = config.cookie_config();
        assert_eq!(cookie.name, "token");
        assert_eq!(cookie.max_age_secs, Some(7 * 24 * 3600));
        assert!(cookie.http_only);
    }
}
