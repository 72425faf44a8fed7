//! # Infrastructure Layer
//!
//! Concrete implementations of the core traits:
//! - **Database**: Postgres repositories using SQLx
//! - **Cache**: Redis client, character cache and token store
//! - **Source**: reqwest client for the upstream Lord of the Rings API

use lor_core::errors::DomainError;
use thiserror::Error;

/// Database module - Postgres implementations using SQLx
pub mod database;

/// Cache module - Redis client and the stores built on it
pub mod cache;

/// Source module - upstream character API client
pub mod source;

/// Errors raised below the domain boundary
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Cache(e) => DomainError::CacheUnavailable {
                message: e.to_string(),
            },
            InfrastructureError::Database(e) => DomainError::StoreUnavailable {
                message: e.to_string(),
            },
            InfrastructureError::Config(message) => DomainError::Internal { message },
        }
    }
}
