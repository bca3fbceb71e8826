//! Shared subject-claim extraction for boycott backend services
//!
//! Services never parse tokens themselves; they ask a [`SubjectResolver`]
//! for the authenticated subject and treat `None` as unauthenticated.
//! The production resolver validates RS256 bearer tokens. HS256 and other
//! symmetric algorithms are rejected to prevent algorithm confusion
//! attacks.

use actix_web::http::header;
use actix_web::HttpRequest;
use anyhow::{anyhow, Result};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

/// Clock skew tolerance for `exp`/`nbf` checks, in seconds.
const VALIDATION_LEEWAY_SECS: u64 = 30;

/// JWT algorithm - MUST be RS256 for all boycott backend services
const JWT_ALGORITHM: Algorithm = Algorithm::RS256;

/// JWT Claims structure - the standard claims this backend issues
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID as UUID string)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Token type: "access" or "refresh"
    pub token_type: String,
}

/// Anything that can produce an authenticated subject from a request.
///
/// `None` means the request carries no usable identity; callers decide
/// what that implies (for the HTTP services it is a 401). Implementations
/// must be shareable across actix workers.
pub trait SubjectResolver: Send + Sync {
    fn resolve_subject(&self, req: &HttpRequest) -> Option<Uuid>;
}

/// Production resolver: validates an RS256 bearer token and extracts `sub`.
///
/// Validation-only: holds the public key, never the signing key.
pub struct JwtSubjectResolver {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtSubjectResolver {
    /// Build a resolver from an RSA public key in PEM format.
    pub fn from_public_key_pem(public_key_pem: &str) -> Result<Self> {
        let decoding_key = DecodingKey::from_rsa_pem(public_key_pem.as_bytes())
            .map_err(|e| anyhow!("Failed to parse RSA public key: {e}"))?;

        let mut validation = Validation::new(JWT_ALGORITHM);
        validation.leeway = VALIDATION_LEEWAY_SECS;

        Ok(Self {
            decoding_key,
            validation,
        })
    }
}

impl SubjectResolver for JwtSubjectResolver {
    fn resolve_subject(&self, req: &HttpRequest) -> Option<Uuid> {
        let auth_header = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())?;

        let token = auth_header.strip_prefix("Bearer ")?;

        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                warn!("JWT validation failed: {}", e);
            })
            .ok()?;

        match Uuid::parse_str(&token_data.claims.sub) {
            Ok(user_id) => Some(user_id),
            Err(e) => {
                warn!("Invalid subject UUID in token: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    // 2048-bit RSA public key, test-only. There is no matching private key
    // in the tree, so any token is guaranteed to fail signature checks.
    const TEST_PUBLIC_KEY_PEM: &str = "-----BEGIN PUBLIC KEY-----\n\
MIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8AMIIBCgKCAQEAzLo48sCCn/l8oVCUzZo/\n\
OnIoHUY9AURBPQRyRls1kp4GOdnGyA020/AvlPh8k1AhFtT00oGFPfAiNwk6jJZN\n\
yt2VpxHYxk17Oc4x/fevoEc/uPTKUEdhdBNtRdyRInZTZsQ1f2Ia3tLMRmrCVoHW\n\
reDHBoLparvklAQN5QCW+7SgSp71fE9dxtEvE1yGaMBttQ3oFKHQfgG5uilZjFHO\n\
dQszxVX9ZqRITi5DdIFG0s14/LI+jUPxAz3JnEGuHM8QUFhk2YNQQdw9qVZpSKqK\n\
gLqsM0MIvKNSJ6F0RcUaWvqz8j+eqPZePH1t5cjLqnX+JQciLyXSTuTB18aG4lYJ\n\
DwIDAQAB\n\
-----END PUBLIC KEY-----\n";

    fn resolver() -> JwtSubjectResolver {
        JwtSubjectResolver::from_public_key_pem(TEST_PUBLIC_KEY_PEM)
            .expect("test public key should parse")
    }

    #[test]
    fn missing_authorization_header_resolves_to_none() {
        let req = TestRequest::default().to_http_request();
        assert!(resolver().resolve_subject(&req).is_none());
    }

    #[test]
    fn non_bearer_scheme_resolves_to_none() {
        let req = TestRequest::default()
            .insert_header(("Authorization", "Basic dXNlcjpwYXNz"))
            .to_http_request();
        assert!(resolver().resolve_subject(&req).is_none());
    }

    #[test]
    fn garbage_token_resolves_to_none() {
        let req = TestRequest::default()
            .insert_header(("Authorization", "Bearer not.a.token"))
            .to_http_request();
        assert!(resolver().resolve_subject(&req).is_none());
    }

    #[test]
    fn invalid_pem_is_rejected() {
        assert!(JwtSubjectResolver::from_public_key_pem("not a pem").is_err());
    }
}
