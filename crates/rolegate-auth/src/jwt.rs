//! Token issuing and verification.
//!
//! Tokens are HS256 JWTs signed with the shared secret from [`JwtConfig`].
//! Expiry is checked with zero leeway: a token past its `exp` is rejected
//! with [`TokenError::Expired`] no matter how recently it lapsed.

use std::fmt;

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::debug;

use rolegate_config::JwtConfig;

use crate::claims::Claims;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("invalid token signature")]
    InvalidSignature,
    #[error("token has expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
    #[error("failed to create token: {0}")]
    Encoding(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            _ => TokenError::Malformed,
        }
    }
}

/// Issues and verifies bearer tokens.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_seconds: i64,
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    pub fn new(jwt_config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding: EncodingKey::from_secret(jwt_config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(jwt_config.secret.as_bytes()),
            validation,
            ttl_seconds: jwt_config.access_token_expiry,
        }
    }

    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_seconds
    }

    /// Issues a token for `subject` valid from now until now + TTL.
    pub fn issue(&self, subject: &str, roles: &[String]) -> Result<String, TokenError> {
        self.issue_at(subject, roles, Utc::now().timestamp())
    }

    /// Issues a token as if it had been created at `issued_at` (Unix seconds).
    pub fn issue_at(
        &self,
        subject: &str,
        roles: &[String],
        issued_at: i64,
    ) -> Result<String, TokenError> {
        let iat = issued_at.max(0);
        let exp = (iat + self.ttl_seconds).max(0);

        let claims = Claims {
            sub: subject.to_string(),
            roles: roles.to_vec(),
            iat: iat as usize,
            exp: exp as usize,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::Encoding(e.to_string()))?;
        debug!(subject = %subject, exp = claims.exp, "token issued");
        Ok(token)
    }

    /// Checks signature and expiry and returns the embedded claims.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key-at-least-32-characters-long".to_string(),
            access_token_expiry: 3600,
        }
    }

    fn roles(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let service = TokenService::new(&get_test_jwt_config());
        let token = service
            .issue("ada@example.com", &roles(&["ROLE_ADMIN", "ROLE_USER"]))
            .unwrap();

        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.sub, "ada@example.com");
        assert_eq!(claims.roles, roles(&["ROLE_ADMIN", "ROLE_USER"]));
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_verify_expired_token() {
        let service = TokenService::new(&get_test_jwt_config());
        let issued_at = Utc::now().timestamp() - 3600 - 5;
        let token = service
            .issue_at("old@example.com", &roles(&["ROLE_USER"]), issued_at)
            .unwrap();

        assert_eq!(service.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_expiry_has_no_leeway() {
        let service = TokenService::new(&get_test_jwt_config());
        // Lapsed one second ago; a default 60s leeway would still accept it.
        let issued_at = Utc::now().timestamp() - 3600 - 1;
        let token = service.issue_at("x@example.com", &[], issued_at).unwrap();

        assert_eq!(service.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_verify_wrong_secret() {
        let service = TokenService::new(&get_test_jwt_config());
        let token = service.issue("ada@example.com", &[]).unwrap();

        let other = TokenService::new(&JwtConfig {
            secret: "different-secret-key-at-least-32-characters".to_string(),
            access_token_expiry: 3600,
        });

        assert_eq!(other.verify(&token), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_verify_tampered_payload() {
        let service = TokenService::new(&get_test_jwt_config());
        let token = service.issue("ada@example.com", &roles(&["ROLE_USER"])).unwrap();
        let forged = service
            .issue("eve@example.com", &roles(&["ROLE_ADMIN"]))
            .unwrap();

        // Splice the forged payload onto the original signature.
        let original: Vec<&str> = token.split('.').collect();
        let forged: Vec<&str> = forged.split('.').collect();
        let tampered = format!("{}.{}.{}", original[0], forged[1], original[2]);

        assert_eq!(service.verify(&tampered), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_verify_malformed() {
        let service = TokenService::new(&get_test_jwt_config());
        assert_eq!(service.verify("not-a-token"), Err(TokenError::Malformed));
        assert_eq!(service.verify(""), Err(TokenError::Malformed));
    }

    #[test]
    fn test_ttl_from_config() {
        let service = TokenService::new(&JwtConfig {
            secret: "s".to_string(),
            access_token_expiry: 120,
        });
        assert_eq!(service.ttl_seconds(), 120);
    }

    #[test]
    fn test_debug_hides_keys() {
        let service = TokenService::new(&get_test_jwt_config());
        let debug = format!("{:?}", service);
        assert!(debug.contains("ttl_seconds"));
        assert!(!debug.contains("test-secret"));
    }
}
