//! User repository trait defining the interface for account persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::User;
use crate::errors::DomainError;

/// Repository trait for `User` persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The persisted user
    /// * `Err(DomainError::Auth(AuthError::DuplicateEmail))` - Email taken
    /// * `Err(DomainError::StoreUnavailable)` - Database failure
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Find a user by email (case-insensitive, emails are stored lowercase)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;
}
