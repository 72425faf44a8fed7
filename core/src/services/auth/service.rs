//! Main authentication service implementation

use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::User;
use crate::errors::{AuthError, DomainError};
use crate::repositories::UserRepository;
use crate::services::token::{TokenService, TokenStore};

use super::config::AuthServiceConfig;

/// Authentication service over a user repository and the token service
pub struct AuthService<U: UserRepository, S: TokenStore> {
    users: U,
    tokens: TokenService<S>,
    config: AuthServiceConfig,
}

impl<U: UserRepository, S: TokenStore> AuthService<U, S> {
    /// Creates a new auth service instance
    pub fn new(users: U, tokens: TokenService<S>, config: AuthServiceConfig) -> Self {
        Self {
            users,
            tokens,
            config,
        }
    }

    /// Registers a new account
    ///
    /// # Errors
    /// * `DuplicateEmail` - An account with this email already exists
    pub async fn signup(&self, email: &str, password: &str) -> Result<User, DomainError> {
        let email = email.trim().to_lowercase();

        // The unique constraint is the real guard; this check just gives
        // a clean error without a constraint-violation round trip.
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AuthError::DuplicateEmail.into());
        }

        let password_hash = bcrypt::hash(password, self.config.bcrypt_cost)
            .map_err(|e| DomainError::Internal {
                message: format!("Password hashing failed: {}", e),
            })?;

        let user = self.users.create(User::new(email, password_hash)).await?;
        info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    /// Authenticates a user and issues a token pair
    ///
    /// Fails with `InvalidCredentials` for both unknown emails and wrong
    /// passwords, so callers cannot probe which emails are registered.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenPair, DomainError> {
        let user = match self.users.find_by_email(email).await? {
            Some(user) => user,
            None => {
                warn!("login attempt for unknown email");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        let password_matches =
            bcrypt::verify(password, &user.password_hash).map_err(|e| DomainError::Internal {
                message: format!("Password verification failed: {}", e),
            })?;

        if !password_matches {
            warn!(user_id = %user.id, "login attempt with wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        self.tokens.generate_pair(user.id).await
    }

    /// Rotates a refresh token into a new pair
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, DomainError> {
        self.tokens.refresh(refresh_token).await
    }

    /// Signs a session out by blacklisting both of its tokens
    pub async fn signout(
        &self,
        access_token: &str,
        refresh_token: &str,
    ) -> Result<(), DomainError> {
        self.tokens.revoke_pair(access_token, refresh_token).await
    }

    /// Loads the account behind an authenticated request
    pub async fn current_user(&self, user_id: Uuid) -> Result<User, DomainError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AuthError::UserNotFound.into())
    }

    /// The underlying token service, used by the JWT middleware
    pub fn tokens(&self) -> &TokenService<S> {
        &self.tokens
    }
}
