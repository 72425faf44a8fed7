//! Main token service implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, TokenPair, TokenType, JWT_AUDIENCE, JWT_ISSUER};
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;
use super::store::TokenStore;

/// Service for issuing, verifying and revoking JWT tokens
///
/// Both access and refresh tokens are HS256 JWTs carrying a `jti` claim.
/// Revocation goes through the token store: a revoked jti is blacklisted
/// for the remainder of its lifetime, after which the entry self-expires.
pub struct TokenService<S: TokenStore> {
    store: S,
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl<S: TokenStore> TokenService<S> {
    /// Creates a new token service instance
    pub fn new(store: S, config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.set_audience(&[JWT_AUDIENCE]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Self {
            store,
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Generates a new access/refresh token pair for a user
    ///
    /// Both identifiers are recorded in the token store with their
    /// respective lifetimes.
    pub async fn generate_pair(&self, user_id: Uuid) -> Result<TokenPair, DomainError> {
        let access_claims = Claims::new(user_id, TokenType::Access, self.config.access_token_ttl);
        let refresh_claims =
            Claims::new(user_id, TokenType::Refresh, self.config.refresh_token_ttl);

        let access_token = self.encode_jwt(&access_claims)?;
        let refresh_token = self.encode_jwt(&refresh_claims)?;

        self.store
            .issue(&access_claims.jti, access_claims.remaining_ttl())
            .await?;
        self.store
            .issue(&refresh_claims.jti, refresh_claims.remaining_ttl())
            .await?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            access_expires_in: self.config.access_token_ttl,
            refresh_expires_in: self.config.refresh_token_ttl,
        })
    }

    /// Verifies an access token and returns its claims
    ///
    /// # Errors
    /// * `ExpiredToken` - Past its `exp` claim
    /// * `InvalidToken` - Malformed, wrong signature, or a refresh token
    /// * `BlacklistedToken` - Revoked via signout or rotation
    pub async fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError> {
        let claims = self.decode_jwt(token)?;

        if claims.token_type != TokenType::Access {
            return Err(TokenError::InvalidToken.into());
        }

        if self.store.is_blacklisted(&claims.jti).await? {
            return Err(TokenError::BlacklistedToken.into());
        }

        Ok(claims)
    }

    /// Verifies a refresh token and returns its claims
    pub async fn verify_refresh_token(&self, token: &str) -> Result<Claims, DomainError> {
        let claims = self.decode_jwt(token)?;

        if claims.token_type != TokenType::Refresh {
            return Err(TokenError::InvalidToken.into());
        }

        if self.store.is_blacklisted(&claims.jti).await? {
            return Err(TokenError::BlacklistedToken.into());
        }

        Ok(claims)
    }

    /// Rotates a refresh token: blacklists the presented one, issues a new pair
    ///
    /// The old token is revoked before the new pair is issued, so a
    /// replayed refresh token fails with `BlacklistedToken`.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, DomainError> {
        let claims = self.verify_refresh_token(refresh_token).await?;
        let user_id = claims
            .user_id()
            .map_err(|_| DomainError::from(TokenError::InvalidToken))?;

        self.store
            .blacklist(&claims.jti, claims.remaining_ttl())
            .await?;

        self.generate_pair(user_id).await
    }

    /// Blacklists both tokens of a session (signout)
    ///
    /// The refresh token must be valid; a stale access token is ignored
    /// since it is past rejection anyway.
    pub async fn revoke_pair(
        &self,
        access_token: &str,
        refresh_token: &str,
    ) -> Result<(), DomainError> {
        let refresh_claims = self.verify_refresh_token(refresh_token).await?;
        self.store
            .blacklist(&refresh_claims.jti, refresh_claims.remaining_ttl())
            .await?;

        if let Ok(access_claims) = self.decode_jwt(access_token) {
            self.store
                .blacklist(&access_claims.jti, access_claims.remaining_ttl())
                .await?;
        }

        Ok(())
    }

    /// Encodes claims into a JWT
    fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| TokenError::TokenGenerationFailed.into())
    }

    /// Decodes and validates a JWT, mapping decode failures to the taxonomy
    fn decode_jwt(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                if e.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature {
                    DomainError::Token(TokenError::ExpiredToken)
                } else {
                    DomainError::Token(TokenError::InvalidToken)
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::token::MockTokenStore;

    fn service() -> (TokenService<MockTokenStore>, MockTokenStore) {
        let store = MockTokenStore::new();
        let service = TokenService::new(store.clone(), TokenServiceConfig::default());
        (service, store)
    }

    #[tokio::test]
    async fn generated_pair_verifies() {
        let (service, store) = service();
        let user_id = Uuid::new_v4();

        let pair = service.generate_pair(user_id).await.unwrap();

        let access = service.verify_access_token(&pair.access_token).await.unwrap();
        assert_eq!(access.user_id().unwrap(), user_id);
        assert!(store.was_issued(&access.jti).await);

        let refresh = service
            .verify_refresh_token(&pair.refresh_token)
            .await
            .unwrap();
        assert_eq!(refresh.user_id().unwrap(), user_id);
    }

    #[tokio::test]
    async fn access_token_rejected_as_refresh() {
        let (service, _) = service();
        let pair = service.generate_pair(Uuid::new_v4()).await.unwrap();

        let err = service
            .verify_refresh_token(&pair.access_token)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Token(TokenError::InvalidToken)));
    }

    #[tokio::test]
    async fn refresh_rotation_blacklists_old_token() {
        let (service, _) = service();
        let pair = service.generate_pair(Uuid::new_v4()).await.unwrap();

        // First rotation succeeds
        let rotated = service.refresh(&pair.refresh_token).await.unwrap();
        assert_ne!(rotated.refresh_token, pair.refresh_token);

        // Replaying the original refresh token fails
        let err = service.refresh(&pair.refresh_token).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Token(TokenError::BlacklistedToken)
        ));
    }

    #[tokio::test]
    async fn revoke_pair_blacklists_both_tokens() {
        let (service, store) = service();
        let pair = service.generate_pair(Uuid::new_v4()).await.unwrap();

        service
            .revoke_pair(&pair.access_token, &pair.refresh_token)
            .await
            .unwrap();
        assert_eq!(store.blacklisted_count().await, 2);

        let err = service
            .verify_access_token(&pair.access_token)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Token(TokenError::BlacklistedToken)
        ));
    }

    #[tokio::test]
    async fn garbage_is_invalid_token() {
        let (service, _) = service();
        let err = service.verify_access_token("not-a-jwt").await.unwrap_err();
        assert!(matches!(err, DomainError::Token(TokenError::InvalidToken)));
    }

    #[tokio::test]
    async fn wrong_secret_is_rejected() {
        let (service, _) = service();
        let pair = service.generate_pair(Uuid::new_v4()).await.unwrap();

        let other = TokenService::new(
            MockTokenStore::new(),
            TokenServiceConfig {
                jwt_secret: "another-secret".to_string(),
                ..TokenServiceConfig::default()
            },
        );

        let err = other.verify_access_token(&pair.access_token).await.unwrap_err();
        assert!(matches!(err, DomainError::Token(TokenError::InvalidToken)));
    }
}
