//! Session token issuance and validation for notetect.
//!
//! Sessions are stateless bearer JWTs binding a user id to an expiry
//! window. A token is either valid or invalid; nothing in between, and no
//! server-side revocation before natural expiry.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{NotetectError, Result};

/// JWT claims carried by a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (user ID).
    pub sub: i64,
    /// Issued at timestamp (seconds since epoch).
    pub iat: u64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: u64,
}

/// Issues and validates signed session tokens.
///
/// The signing key is injected once at construction and never mutated.
/// Rotating the key invalidates every outstanding token: there is no
/// key-id negotiation, so operators who need live sessions to survive a
/// restart must keep the secret stable.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiry_days: u64,
}

impl TokenService {
    /// Create a token service from the process-wide signing secret.
    pub fn new(secret: &str, expiry_days: u64) -> Self {
        let mut validation = Validation::default();
        validation.validate_exp = true;
        // Expiry is a hard boundary; no grace window
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            expiry_days,
        }
    }

    /// Issue a session token for a user.
    pub fn issue(&self, user_id: i64) -> Result<String> {
        let now = chrono::Utc::now().timestamp() as u64;
        let claims = SessionClaims {
            sub: user_id,
            iat: now,
            exp: now + self.expiry_days * 24 * 60 * 60,
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to encode session token: {}", e);
            NotetectError::InvalidSession
        })
    }

    /// Validate a session token, returning the user id it binds.
    ///
    /// Bad signature, bad encoding, and expiry all collapse into the single
    /// `InvalidSession` outcome so callers cannot probe which check failed.
    pub fn validate(&self, token: &str) -> Result<i64> {
        let data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::debug!("Session token validation failed: {}", e);
                NotetectError::InvalidSession
            })?;

        Ok(data.claims.sub)
    }

    /// Session lifetime in seconds, for the transport cookie max-age.
    pub fn expiry_secs(&self) -> u64 {
        self.expiry_days * 24 * 60 * 60
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("expiry_days", &self.expiry_days)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-for-testing-only";

    #[test]
    fn test_issue_and_validate_round_trip() {
        let service = TokenService::new(SECRET, 7);

        let token = service.issue(42).unwrap();
        let user_id = service.validate(&token).unwrap();

        assert_eq!(user_id, 42);
    }

    #[test]
    fn test_validate_wrong_key() {
        let issuer = TokenService::new("secret-one-that-is-long-enough!!", 7);
        let verifier = TokenService::new("secret-two-that-is-long-enough!!", 7);

        let token = issuer.issue(1).unwrap();
        let result = verifier.validate(&token);

        assert!(matches!(result, Err(NotetectError::InvalidSession)));
    }

    #[test]
    fn test_validate_garbage_token() {
        let service = TokenService::new(SECRET, 7);

        for garbage in ["", "not.a.jwt", "aaaa.bbbb.cccc"] {
            let result = service.validate(garbage);
            assert!(matches!(result, Err(NotetectError::InvalidSession)));
        }
    }

    #[test]
    fn test_validate_expired_token() {
        let service = TokenService::new(SECRET, 7);

        // Hand-craft a token whose exp is in the past but whose signature is
        // valid for the service key
        let now = chrono::Utc::now().timestamp() as u64;
        let claims = SessionClaims {
            sub: 1,
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        let result = service.validate(&token);
        assert!(matches!(result, Err(NotetectError::InvalidSession)));
    }

    #[test]
    fn test_claims_window() {
        let service = TokenService::new(SECRET, 7);
        let token = service.issue(5).unwrap();

        // Decode without validation to inspect the claims directly
        let mut no_validate = Validation::default();
        no_validate.validate_exp = false;
        let data = decode::<SessionClaims>(
            &token,
            &DecodingKey::from_secret(SECRET.as_bytes()),
            &no_validate,
        )
        .unwrap();

        assert_eq!(data.claims.sub, 5);
        assert_eq!(data.claims.exp - data.claims.iat, 7 * 24 * 60 * 60);
    }

    #[test]
    fn test_expiry_secs() {
        let service = TokenService::new(SECRET, 7);
        assert_eq!(service.expiry_secs(), 604_800);
    }

    #[test]
    fn test_tampered_token_rejected() {
        let service = TokenService::new(SECRET, 7);
        let token = service.issue(1).unwrap();

        // Flip a character in the payload segment
        let mut parts: Vec<String> = token.split('.').map(String::from).collect();
        let mut payload: Vec<u8> = parts[1].clone().into_bytes();
        payload[0] = if payload[0] == b'A' { b'B' } else { b'A' };
        parts[1] = String::from_utf8(payload).unwrap();
        let tampered = parts.join(".");

        let result = service.validate(&tampered);
        assert!(matches!(result, Err(NotetectError::InvalidSession)));
    }
}
