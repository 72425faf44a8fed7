//! Domain-specific error types for authentication, tokens and characters
//!
//! The taxonomy is deliberately small: everything a caller can act on has
//! its own variant with a stable error code; infrastructure failures are
//! collapsed into the `*Unavailable` variants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("An account with this email already exists")]
    DuplicateEmail,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User not found")]
    UserNotFound,
}

/// Token validation and management errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    ExpiredToken,

    #[error("Token has been revoked")]
    BlacklistedToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Character and favorite errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CharacterError {
    #[error("Character not found")]
    NotFound,

    #[error("Character is not in favorites")]
    FavoriteNotFound,
}

/// Umbrella error type crossing service boundaries
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Character(#[from] CharacterError),

    #[error("Validation failed: {message}")]
    Validation { message: String },

    #[error("Persisted store unavailable: {message}")]
    StoreUnavailable { message: String },

    #[error("Cache unavailable: {message}")]
    CacheUnavailable { message: String },

    #[error("Upstream source unavailable: {message}")]
    UpstreamUnavailable { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Unified error response structure for API responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl ToString, message: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            timestamp: Utc::now(),
        }
    }
}

impl DomainError {
    /// Stable error code carried in API responses
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Auth(AuthError::DuplicateEmail) => "DUPLICATE_EMAIL",
            DomainError::Auth(AuthError::InvalidCredentials) => "INVALID_CREDENTIALS",
            DomainError::Auth(AuthError::UserNotFound) => "NOT_FOUND",
            DomainError::Token(TokenError::InvalidToken) => "INVALID_TOKEN",
            DomainError::Token(TokenError::ExpiredToken) => "EXPIRED_TOKEN",
            DomainError::Token(TokenError::BlacklistedToken) => "BLACKLISTED_TOKEN",
            DomainError::Token(TokenError::TokenGenerationFailed) => "INTERNAL_ERROR",
            DomainError::Character(CharacterError::NotFound) => "NOT_FOUND",
            DomainError::Character(CharacterError::FavoriteNotFound) => "NOT_FOUND",
            DomainError::Validation { .. } => "VALIDATION_ERROR",
            DomainError::StoreUnavailable { .. } => "STORE_UNAVAILABLE",
            DomainError::CacheUnavailable { .. } => "CACHE_UNAVAILABLE",
            DomainError::UpstreamUnavailable { .. } => "UPSTREAM_UNAVAILABLE",
            DomainError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        ErrorResponse::new(err.code(), err.to_string())
    }
}
