//! JWT token generation and validation

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::types::{Result, VitrineError};

/// JWT claims carried by admin tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// Admin document id (hex)
    pub sub: String,
    pub email: String,
    pub role: String,
    /// Must match the admin's current token version; password changes
    /// bump the version and orphan outstanding tokens
    #[serde(default)]
    pub token_version: i32,
    pub iat: u64,
    pub exp: u64,
}

/// Issues and validates HS256 admin tokens
#[derive(Clone)]
pub struct JwtValidator {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry_seconds: u64,
}

impl JwtValidator {
    pub fn new(secret: &str, expiry_seconds: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiry_seconds,
        }
    }

    /// Issue a token for an admin. Returns the token and its expiry
    /// (unix seconds).
    pub fn issue_token(
        &self,
        admin_id: &str,
        email: &str,
        role: &str,
        token_version: i32,
    ) -> Result<(String, u64)> {
        let now = chrono::Utc::now().timestamp() as u64;
        let exp = now + self.expiry_seconds;

        let claims = Claims {
            sub: admin_id.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            token_version,
            iat: now,
            exp,
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| VitrineError::Auth(format!("Failed to sign token: {e}")))?;

        Ok((token, exp))
    }

    /// Verify a token's signature and expiry, returning its claims
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    VitrineError::Auth("Token has expired. Please log in again.".into())
                }
                _ => VitrineError::Auth("Invalid token. Please log in again.".into()),
            })
    }
}

/// Extract a Bearer token from an Authorization header value
pub fn extract_token_from_header(header: Option<&str>) -> Option<&str> {
    header
        .and_then(|h| h.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> JwtValidator {
        JwtValidator::new("test-secret", 3600)
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let jwt = validator();
        let (token, exp) = jwt.issue_token("abc123", "a@b.co", "admin", 1).unwrap();

        let claims = jwt.verify_token(&token).unwrap();
        assert_eq!(claims.sub, "abc123");
        assert_eq!(claims.email, "a@b.co");
        assert_eq!(claims.role, "admin");
        assert_eq!(claims.token_version, 1);
        assert_eq!(claims.exp, exp);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let (token, _) = validator().issue_token("abc", "a@b.co", "admin", 1).unwrap();
        let other = JwtValidator::new("other-secret", 3600);
        assert!(other.verify_token(&token).is_err());
    }

    #[test]
    fn test_extract_token_from_header() {
        assert_eq!(extract_token_from_header(Some("Bearer tok")), Some("tok"));
        assert_eq!(extract_token_from_header(Some("Basic tok")), None);
        assert_eq!(extract_token_from_header(Some("Bearer ")), None);
        assert_eq!(extract_token_from_header(None), None);
    }
}
