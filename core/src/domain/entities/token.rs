//! Token entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT issuer
pub const JWT_ISSUER: &str = "lor-api";

/// JWT audience
pub const JWT_AUDIENCE: &str = "lor-api-clients";

/// Discriminates access tokens from refresh tokens
///
/// Carried in the claims so an access token can never be presented where
/// a refresh token is expected, and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID, the identifier tracked by the token store
    pub jti: String,

    /// Whether this is an access or refresh token
    pub token_type: TokenType,
}

impl Claims {
    /// Creates new claims for a token of the given type
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's UUID
    /// * `token_type` - Access or refresh
    /// * `ttl_seconds` - Lifetime of the token in seconds
    pub fn new(user_id: Uuid, token_type: TokenType, ttl_seconds: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(ttl_seconds);

        Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            nbf: now.timestamp(),
            iss: JWT_ISSUER.to_string(),
            aud: JWT_AUDIENCE.to_string(),
            jti: Uuid::new_v4().to_string(),
            token_type,
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Seconds until expiry, zero when already expired
    ///
    /// Used as the blacklist TTL so entries self-expire alongside the
    /// token they shadow.
    pub fn remaining_ttl(&self) -> u64 {
        (self.exp - Utc::now().timestamp()).max(0) as u64
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Token pair returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,

    /// Access token expiry time in seconds
    pub access_expires_in: i64,

    /// Refresh token expiry time in seconds
    pub refresh_expires_in: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_claims_carry_issuer_and_type() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(user_id, TokenType::Access, 1800);

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.iss, JWT_ISSUER);
        assert_eq!(claims.aud, JWT_AUDIENCE);
        assert_eq!(claims.token_type, TokenType::Access);
        assert!(!claims.is_expired());
        assert_eq!(claims.user_id().unwrap(), user_id);
    }

    #[test]
    fn expired_claims_report_zero_remaining_ttl() {
        let claims = Claims::new(Uuid::new_v4(), TokenType::Refresh, -60);
        assert!(claims.is_expired());
        assert_eq!(claims.remaining_ttl(), 0);
    }

    #[test]
    fn token_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TokenType::Refresh).unwrap(),
            "\"refresh\""
        );
    }

    #[test]
    fn jti_is_unique_per_token() {
        let user_id = Uuid::new_v4();
        let a = Claims::new(user_id, TokenType::Access, 60);
        let b = Claims::new(user_id, TokenType::Access, 60);
        assert_ne!(a.jti, b.jti);
    }
}
