/**
 * Session Tokens
 *
 * This module handles JWT generation and validation for user sessions.
 * Tokens are HS256-signed, always carry an `exp` claim, and are never
 * stored server-side: a token is valid exactly as long as its signature
 * checks out and it has not expired.
 *
 * The signing secret is handed to [`TokenIssuer::new`] once at startup;
 * nothing in here reads the environment.
 */

use std::time::Duration;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::auth::error::AuthError;

/// Default token lifetime (24 hours)
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Longest lifetime configuration will accept (one year)
pub const MAX_TOKEN_TTL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub id: Uuid,
    /// Username at the time the token was issued
    pub username: String,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Signs and verifies session tokens with a server-held secret
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp"]);
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    /// Create a token for a user
    ///
    /// The token expires `ttl` after the moment it is issued.
    pub fn issue(&self, user_id: Uuid, username: &str) -> Result<String, AuthError> {
        let now = jsonwebtoken::get_current_timestamp();
        let exp = now
            .checked_add(self.ttl.as_secs())
            .ok_or_else(|| AuthError::Signing(format!("token lifetime {:?} overflows", self.ttl)))?;
        let claims = Claims {
            id: user_id,
            username: username.to_owned(),
            iat: now,
            exp,
        };
        self.sign(&claims)
    }

    /// Sign an arbitrary set of claims
    pub fn sign(&self, claims: &Claims) -> Result<String, AuthError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(|e| AuthError::Signing(e.to_string()))
    }

    /// Verify and decode a token
    ///
    /// Signature mismatches, expiry and everything else are reported as
    /// distinct [`AuthError`] variants.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                ErrorKind::ExpiredSignature => AuthError::Expired,
                _ => AuthError::Malformed,
            })
    }
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(b"neverTell", DEFAULT_TOKEN_TTL)
    }

    #[test]
    fn test_issue_token() {
        let token = issuer().issue(Uuid::new_v4(), "buster").unwrap();
        assert!(!token.is_empty());
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_verify_token() {
        let issuer = issuer();
        let user_id = Uuid::new_v4();
        let token = issuer.issue(user_id, "buster").unwrap();

        let claims = issuer.verify(&token).unwrap();
        assert_eq!(claims.id, user_id);
        assert_eq!(claims.username, "buster");
        assert_eq!(claims.exp - claims.iat, DEFAULT_TOKEN_TTL.as_secs());
    }

    #[test]
    fn test_verify_wrong_secret() {
        let token = issuer().issue(Uuid::new_v4(), "buster").unwrap();
        let other = TokenIssuer::new(b"somethingElse", DEFAULT_TOKEN_TTL);
        assert_eq!(other.verify(&token).unwrap_err(), AuthError::InvalidSignature);
    }

    #[test]
    fn test_verify_expired_token() {
        let issuer = issuer();
        let now = jsonwebtoken::get_current_timestamp();
        let claims = Claims {
            id: Uuid::new_v4(),
            username: "buster".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = issuer.sign(&claims).unwrap();
        assert_eq!(issuer.verify(&token).unwrap_err(), AuthError::Expired);
    }

    #[test]
    fn test_verify_garbage() {
        let issuer = issuer();
        assert_eq!(issuer.verify("invalid.token.here").unwrap_err(), AuthError::Malformed);
        assert_eq!(issuer.verify("").unwrap_err(), AuthError::Malformed);
        assert_eq!(issuer.verify("abc").unwrap_err(), AuthError::Malformed);
    }

    #[test]
    fn test_verify_missing_expiry() {
        #[derive(Serialize)]
        struct NoExpiry {
            id: Uuid,
            username: String,
            iat: u64,
        }

        let token = encode(
            &Header::new(Algorithm::HS256),
            &NoExpiry {
                id: Uuid::new_v4(),
                username: "buster".to_string(),
                iat: jsonwebtoken::get_current_timestamp(),
            },
            &EncodingKey::from_secret(b"neverTell"),
        )
        .unwrap();

        assert_eq!(issuer().verify(&token).unwrap_err(), AuthError::Malformed);
    }

    #[test]
    fn test_issue_with_overflowing_ttl() {
        let issuer = TokenIssuer::new(b"neverTell", Duration::from_secs(u64::MAX));
        let err = issuer.issue(Uuid::new_v4(), "buster").unwrap_err();
        assert!(matches!(err, AuthError::Signing(_)));
        assert!(!err.is_rejection());
    }

    #[test]
    fn test_issue_with_max_ttl() {
        let issuer = TokenIssuer::new(b"neverTell", MAX_TOKEN_TTL);
        let token = issuer.issue(Uuid::new_v4(), "buster").unwrap();
        let claims = issuer.verify(&token).unwrap();
        assert_eq!(claims.exp - claims.iat, MAX_TOKEN_TTL.as_secs());
    }

    #[test]
    fn test_debug_hides_keys() {
        let debug = format!("{:?}", issuer());
        assert!(!debug.contains("neverTell"));
    }
}
