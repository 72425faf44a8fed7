//! Authentication request and response DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use lor_core::domain::entities::token::TokenPair;
use lor_core::domain::entities::User;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignoutRequest {
    pub refresh_token: String,
}

/// Token pair handed to the client after login or refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPairResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub refresh_expires_in: i64,
}

impl From<TokenPair> for TokenPairResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: pair.access_expires_in,
            refresh_expires_in: pair.refresh_expires_in,
        }
    }
}

/// Public view of an account (never carries the password hash)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_rejects_malformed_email() {
        let request = SignupRequest {
            email: "not-an-email".to_string(),
            password: "long-enough-pass".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn signup_rejects_short_password() {
        let request = SignupRequest {
            email: "frodo@shire.me".to_string(),
            password: "short".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn token_pair_response_is_bearer() {
        let response = TokenPairResponse::from(TokenPair {
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
            access_expires_in: 1800,
            refresh_expires_in: 86400,
        });
        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, 1800);
    }
}
