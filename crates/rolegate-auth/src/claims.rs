//! JWT claim structure carried by bearer tokens.

use serde::{Deserialize, Serialize};

/// Claims embedded in every bearer token.
///
/// Account status is not carried here; the authentication middleware reads
/// it from the directory on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User email (subject claim)
    pub sub: String,
    /// Canonical role names, e.g. `ROLE_ADMIN`
    #[serde(default)]
    pub roles: Vec<String>,
    /// Issued-at (Unix timestamp)
    pub iat: usize,
    /// Expiry (Unix timestamp)
    pub exp: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_serialize() {
        let claims = Claims {
            sub: "ada@example.com".to_string(),
            roles: vec!["ROLE_USER".to_string()],
            iat: 1_700_000_000,
            exp: 1_700_003_600,
        };
        let json = serde_json::to_string(&claims).unwrap();
        assert!(json.contains(r#""sub":"ada@example.com""#));
        assert!(json.contains(r#""roles":["ROLE_USER"]"#));
    }

    #[test]
    fn test_claims_without_roles_deserialize_empty() {
        let json = r#"{"sub":"x@example.com","iat":1,"exp":2}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert!(claims.roles.is_empty());
    }
}
