//! Session Resolver
//!
//! The single authorization gate for protected routes: takes the inbound
//! request headers, pulls the session token out of the `Cookie` header,
//! and verifies it. Every failure - missing header, missing cookie entry,
//! bad or expired token - resolves to `None` (anonymous). This path never
//! errors outward.

use axum::http::HeaderMap;

use crate::application::config::AuthConfig;
use crate::application::token::{IdentityClaim, TokenService};

/// Resolves an inbound request to a verified identity, or anonymous.
#[derive(Clone)]
pub struct SessionResolver {
    tokens: TokenService,
    cookie_name: String,
}

impl SessionResolver {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            tokens: TokenService::from_config(config),
            cookie_name: config.session_cookie_name.clone(),
        }
    }

    /// Resolve the request's cookie header to an identity claim.
    ///
    /// Protected handlers treat `None` as "respond 401 before doing any
    /// mutating or privileged read".
    pub fn resolve(&self, headers: &HeaderMap) -> Option<IdentityClaim> {
        let token = platform::cookie::extract_cookie(headers, &self.cookie_name)?;
        self.tokens.verify(&token).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, header};
    use kernel::id::UserId;

    fn config() -> AuthConfig {
        AuthConfig::with_random_secret()
    }

    fn cookie_headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_resolves_valid_cookie() {
        let config = config();
        let resolver = SessionResolver::new(&config);

        let claim = IdentityClaim {
            id: UserId::new(),
            email: "seller@example.com".to_string(),
        };
        let token = TokenService::from_config(&config).issue(&claim);

        let headers = cookie_headers(&format!("other=1; token={token}"));
        assert_eq!(resolver.resolve(&headers), Some(claim));
    }

    #[test]
    fn test_missing_cookie_header_is_anonymous() {
        let resolver = SessionResolver::new(&config());
        assert_eq!(resolver.resolve(&HeaderMap::new()), None);
    }

    #[test]
    fn test_missing_token_entry_is_anonymous() {
        let resolver = SessionResolver::new(&config());
        let headers = cookie_headers("session=abc; theme=dark");
        assert_eq!(resolver.resolve(&headers), None);
    }

    #[test]
    fn test_invalid_token_is_anonymous() {
        let resolver = SessionResolver::new(&config());
        let headers = cookie_headers("token=not.a.real.token");
        assert_eq!(resolver.resolve(&headers), None);
    }

    #[test]
    fn test_token_signed_with_other_secret_is_anonymous() {
        let resolver = SessionResolver::new(&config());

        let other = AuthConfig::with_random_secret();
        let token = TokenService::from_config(&other).issue(&IdentityClaim {
            id: UserId::new(),
            email: "seller@example.com".to_string(),
        });

        let headers = cookie_headers(&format!("token={token}"));
        assert_eq!(resolver.resolve(&headers), None);
    }
}
